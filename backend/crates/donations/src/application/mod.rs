pub mod config;
pub mod list_donations;
pub mod list_programs;
pub mod record_donation;

pub use list_donations::{ListAllDonationsUseCase, ListMyDonationsUseCase};
pub use list_programs::ListProgramsUseCase;
pub use record_donation::{RecordDonationInput, RecordDonationUseCase};
