/// Configuration: JSON scan settings and environment credentials

pub mod settings;
pub mod credentials;

pub use settings::*;
pub use credentials::Credentials;
