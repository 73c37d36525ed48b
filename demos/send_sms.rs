use std::time::Duration;

use clap::Parser;
use jasmin_http::{
    CallbackUrl, Coding, Content, Credentials, DeliveryReceipt, Destination, DlrLevel, DlrMethod,
    HttpStatusError, JasminClient, JasminError, Priority, SendOptions, SenderId, SmsRequest,
    ValidationError,
};
use tracing_subscriber::EnvFilter;

/// Send one SMS through a Jasmin gateway's HTTP API.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gateway send URL
    #[arg(long, default_value = "http://127.0.0.1:1401/send")]
    endpoint: String,

    #[arg(short, long)]
    username: String,

    #[arg(short, long)]
    password: String,

    /// Destination number
    #[arg(short, long)]
    to: String,

    /// Sender identifier
    #[arg(short, long)]
    from: Option<String>,

    #[arg(short, long, default_value = "Hello world!")]
    content: String,

    /// Data coding scheme (gateway default is 0)
    #[arg(long)]
    coding: Option<u8>,

    #[arg(long)]
    priority: Option<u8>,

    /// Request a delivery receipt
    #[arg(long)]
    dlr: bool,

    /// Receipt callback URL (expected by the gateway with --dlr)
    #[arg(long)]
    dlr_url: Option<String>,

    /// Receipt level: 1 SMSC, 2 terminal, 3 both (expected with --dlr)
    #[arg(long)]
    dlr_level: Option<u8>,

    /// Receipt callback method, GET or POST (expected with --dlr)
    #[arg(long)]
    dlr_method: Option<DlrMethod>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

fn build_request(args: &Args) -> Result<SmsRequest, ValidationError> {
    let dlr = DeliveryReceipt {
        requested: args.dlr,
        callback_url: args.dlr_url.clone().map(CallbackUrl::new).transpose()?,
        level: args.dlr_level.map(DlrLevel::new).transpose()?,
        method: args.dlr_method,
    };
    let options = SendOptions {
        from: args.from.clone().map(SenderId::new).transpose()?,
        coding: args.coding.map(Coding::new).transpose()?,
        priority: args.priority.map(Priority::new).transpose()?,
        dlr,
    };

    Ok(SmsRequest::new(
        Destination::new(args.to.clone())?,
        Content::new(args.content.clone())?,
        options,
    ))
}

fn report_line(result: &Result<String, JasminError>) -> String {
    match result {
        Ok(body) => format!("Message sent successfully! Response: {body}"),
        Err(err) => format!("Failed to send message: {err}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = JasminClient::builder(Credentials::new(&args.username, &args.password)?)
        .endpoint(&args.endpoint)
        .timeout(Duration::from_secs(args.timeout))
        .build()?;
    let request = build_request(&args)?;

    // Send failures are reported, not propagated: the exit code stays 0.
    let result = client.send(request);
    println!("{}", report_line(&result));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["send_sms", "-u", "foo", "-p", "bar", "-t", "+123"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_gateway_defaults() {
        let args = parse(&[]);
        assert_eq!(args.endpoint, "http://127.0.0.1:1401/send");
        assert_eq!(args.content, "Hello world!");
        assert_eq!(args.timeout, 10);

        let request = build_request(&args).unwrap();
        assert_eq!(request.to().raw(), "+123");
        assert_eq!(request.options(), &SendOptions::default());
    }

    #[test]
    fn receipt_arguments_map_to_options() {
        let args = parse(&[
            "--dlr",
            "--dlr-url",
            "https://example.com/dlr",
            "--dlr-level",
            "2",
            "--dlr-method",
            "post",
            "--coding",
            "1",
            "--priority",
            "2",
            "--from",
            "Jasmin",
        ]);
        let request = build_request(&args).unwrap();
        let options = request.options();
        assert!(options.dlr.requested);
        assert_eq!(options.dlr.method, Some(DlrMethod::Post));
        assert_eq!(options.dlr.level.map(DlrLevel::value), Some(2));
        assert_eq!(options.coding.map(Coding::value), Some(1));
        assert_eq!(options.from.as_ref().map(SenderId::as_str), Some("Jasmin"));
    }

    #[test]
    fn receipt_without_callback_fields_is_accepted() {
        let request = build_request(&parse(&["--dlr"])).unwrap();
        assert!(request.options().dlr.requested);
        assert!(request.options().dlr.callback_url.is_none());
    }

    #[test]
    fn out_of_range_priority_is_rejected() {
        let err = build_request(&parse(&["--priority", "9"])).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn report_line_covers_both_outcomes() {
        let ok: Result<String, JasminError> = Ok("Success \"abc\"".to_owned());
        assert_eq!(
            report_line(&ok),
            "Message sent successfully! Response: Success \"abc\""
        );

        let failed: Result<String, JasminError> = Err(JasminError::RequestFailed(
            "connection refused".into(),
        ));
        assert_eq!(
            report_line(&failed),
            "Failed to send message: request failed: connection refused"
        );

        let rejected: Result<String, JasminError> =
            Err(JasminError::RequestFailed(Box::new(HttpStatusError {
                status: 500,
                body: Some("Error \"boom\"".to_owned()),
            })));
        assert_eq!(
            report_line(&rejected),
            "Failed to send message: request failed: unexpected HTTP status: 500"
        );
    }
}
