#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Wake interval must be greater than zero.")]
    ZeroWakeInterval,

    #[error("Couldn't build the dispatch runtime: {0}")]
    RuntimeBuild(#[source] std::io::Error),

    #[error("Couldn't spawn the dispatch thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),
}
