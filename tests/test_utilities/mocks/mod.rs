/// Mock implementations for testing
mod mock_asset_repository;
mod mock_request_pacer;

pub use mock_asset_repository::MockAssetRepository;
pub use mock_request_pacer::MockRequestPacer;
