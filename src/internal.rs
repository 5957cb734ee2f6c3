mod dispatcher;
mod latch;
mod registry;

pub(crate) use dispatcher::Dispatcher;
pub(crate) use latch::Latch;
pub(crate) use registry::{Pruned, Registry};
