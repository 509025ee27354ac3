pub mod birdeye;
pub mod constants;

pub use birdeye::BirdeyePriceOracle;
pub use constants::DEFAULT_BIRDEYE_API_URL;
