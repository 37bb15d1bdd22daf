mod generate_sbom;

pub use generate_sbom::GenerateSbomUseCase;
