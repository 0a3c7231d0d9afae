mod parser;
mod tracing;

pub(crate) use parser::Cli;
pub(crate) use tracing::init as init_tracing;
