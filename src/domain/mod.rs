//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod validation;
mod value;

pub use request::{DeliveryReceipt, SendOptions, SmsRequest};
pub use validation::ValidationError;
pub use value::{
    CallbackUrl, Coding, Content, Destination, DlrLevel, DlrMethod, Password, PhoneNumber,
    Priority, SenderId, Username,
};
