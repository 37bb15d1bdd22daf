/// Application layer: the SBOM generation use case, its DTOs and factories
pub mod dto;
pub mod factories;
pub mod use_cases;
