pub mod codes;
pub mod delivery;
pub mod destination;
pub mod error;
pub mod lars;
pub mod learner;
pub mod message;
pub mod options;

pub use delivery::{AppFinRecord, LearningDelivery, LearningDeliveryFam};
pub use destination::{DpOutcome, LearnerDestinationAndProgression};
pub use error::{IlrError, Result};
pub use lars::{FrameworkKey, LarsData, LarsFrameworkAim};
pub use learner::{EmploymentStatusMonitoring, Learner, LearnerEmploymentStatus, LearnerFam};
pub use message::{CollectionDetails, Header, LearningProvider, Message};
pub use options::{AcademicYear, ValidationOptions};
