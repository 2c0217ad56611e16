//! promptlab のユースケース（アダプター経由で I/O を行う）

pub mod playground;
pub mod session;

pub use playground::{PlaygroundDeps, PlaygroundUseCase, NO_RESPONSE_FALLBACK};
pub use session::{SessionDeps, SessionUseCase};
