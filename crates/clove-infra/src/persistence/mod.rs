//! File-based implementations of the repository traits

mod file_carbon_reference_repo;
mod file_dish_repo;
mod file_price_reference_repo;

pub use file_carbon_reference_repo::FileCarbonReferenceRepository;
pub use file_dish_repo::FileDishRepository;
pub use file_price_reference_repo::FilePriceReferenceRepository;
