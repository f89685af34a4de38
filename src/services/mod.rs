pub mod organizer_service;
pub mod sweepstake_service;

pub use organizer_service::OrganizerService;
pub use sweepstake_service::SweepstakeService;
