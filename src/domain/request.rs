use crate::domain::value::{
    CallbackUrl, Coding, Content, Destination, DlrLevel, DlrMethod, Priority, SenderId,
};

/// Delivery receipt preferences forwarded to the gateway.
///
/// When `requested` is `true` the gateway expects `callback_url`, `level` and
/// `method` as well. That requirement is left to the caller and is not checked
/// here; missing fields are simply not sent. When `requested` is `false` the
/// other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub requested: bool,
    pub callback_url: Option<CallbackUrl>,
    pub level: Option<DlrLevel>,
    pub method: Option<DlrMethod>,
}

impl DeliveryReceipt {
    /// Query parameter name used by Jasmin (`dlr`).
    pub const FIELD: &'static str = "dlr";

    /// A fully specified receipt request.
    pub fn requested(callback_url: CallbackUrl, level: DlrLevel, method: DlrMethod) -> Self {
        Self {
            requested: true,
            callback_url: Some(callback_url),
            level: Some(level),
            method: Some(method),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    pub from: Option<SenderId>,
    pub coding: Option<Coding>,
    pub priority: Option<Priority>,
    pub dlr: DeliveryReceipt,
}

/// One outbound message for a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRequest {
    to: Destination,
    content: Content,
    options: SendOptions,
}

impl SmsRequest {
    pub fn new(to: Destination, content: Content, options: SendOptions) -> Self {
        Self {
            to,
            content,
            options,
        }
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
