pub mod pruning;
