pub mod conformance_command;
pub mod eval_command;
pub mod generate_command;
pub mod test_command;
pub mod types_command;
