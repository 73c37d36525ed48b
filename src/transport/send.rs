use url::Url;

use crate::domain::{
    CallbackUrl, Coding, Content, DeliveryReceipt, Destination, DlrLevel, DlrMethod, Password,
    Priority, SenderId, SmsRequest, Username,
};

/// Value Jasmin expects for `dlr` when a receipt is requested.
const DLR_REQUESTED: &str = "yes";

/// Ordered query pairs for one `send` call, credentials included.
///
/// Receipt parameters are only emitted when a receipt is requested.
pub fn encode_send_query(
    request: &SmsRequest,
    username: &Username,
    password: &Password,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    let options = request.options();

    params.push((Destination::FIELD.to_owned(), request.to().raw().to_owned()));
    if let Some(from) = options.from.as_ref() {
        params.push((SenderId::FIELD.to_owned(), from.as_str().to_owned()));
    }
    params.push((
        Content::FIELD.to_owned(),
        request.content().as_str().to_owned(),
    ));
    if let Some(coding) = options.coding {
        params.push((Coding::FIELD.to_owned(), coding.value().to_string()));
    }
    if let Some(priority) = options.priority {
        params.push((Priority::FIELD.to_owned(), priority.value().to_string()));
    }
    params.push((Username::FIELD.to_owned(), username.as_str().to_owned()));
    params.push((Password::FIELD.to_owned(), password.as_str().to_owned()));
    push_delivery_receipt(&mut params, &options.dlr);

    params
}

fn push_delivery_receipt(params: &mut Vec<(String, String)>, dlr: &DeliveryReceipt) {
    if !dlr.requested {
        return;
    }
    params.push((DeliveryReceipt::FIELD.to_owned(), DLR_REQUESTED.to_owned()));
    if let Some(url) = dlr.callback_url.as_ref() {
        params.push((CallbackUrl::FIELD.to_owned(), url.as_str().to_owned()));
    }
    if let Some(level) = dlr.level {
        params.push((DlrLevel::FIELD.to_owned(), level.value().to_string()));
    }
    if let Some(method) = dlr.method {
        params.push((DlrMethod::FIELD.to_owned(), method.as_str().to_owned()));
    }
}

/// Append `params` to the query string of `endpoint`, keeping any query it already has.
pub fn build_send_url(endpoint: &Url, params: &[(String, String)]) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().extend_pairs(params);
    url
}
