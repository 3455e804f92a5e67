//! Lead notification pipeline: compose the visitor confirmation and the
//! business alert for a validated contact request, then deliver both through
//! whichever transport is configured.
//!
//! Delivery is strictly best-effort. A missing credential turns dispatch
//! into a no-op, a failed send is logged and reported in the
//! [`DispatchReport`], and neither recipient's attempt can block the other.

mod api;
mod composer;
mod dispatcher;
mod profile;
mod smtp;
mod transport;

pub use api::{ApiMailer, ApiSettings};
pub use composer::{EmailContent, NotificationContent, compose};
pub use dispatcher::{
    DeliveryStatus, DispatchReport, Dispatcher, NotificationOutcome, Recipient,
};
pub use profile::CompanyProfile;
pub use smtp::{SmtpMailer, SmtpSettings};
pub use transport::{
    DispatchError, NotificationTransport, OutboundEmail, SEND_TIMEOUT, TransportPath,
};
