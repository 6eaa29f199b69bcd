pub mod booking;
pub mod professional;
pub mod session;
pub mod verification;

pub use booking::{BookingDraft, BookingRecord, BookingStatus, DetailsInput, PaymentCard, Urgency};
pub use professional::{format_naira, long_date, AvailabilityDay, Professional};
pub use session::{Role, UserSession};
pub use verification::{Credential, VerificationDocument, VerificationRequest, VerificationStatus};
