//! Workspace-level integration tests for `fibo-core`.

#[cfg(test)]
mod sequence;
