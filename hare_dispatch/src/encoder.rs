//! Encoding of the serialized command object the consumer unserializes.
//!
//! The format is length-prefixed text: strings are `s:<bytes>:"<text>";`,
//! integers `i:<n>;`, null `N;`, empty arrays `a:0:{}` and objects
//! `O:<bytes>:"<class>":<count>:{<name><value>...}`. All lengths count bytes.

use crate::{DispatchConfig, JobParam, ParamKind};

/// Encode the parameters as serialized property name/value pairs, in order.
///
/// Property names are mangled by visibility: protected ones become
/// `\0*\0name`, private ones `\0Job\0name`. The declared length of a private
/// name only covers the `\0Job\0` wrapper, which is what the consumer expects.
pub fn encode_properties(job_name: &str, params: &[JobParam]) -> String {
    let mut encoded = String::new();
    for param in params {
        let name = match param.kind {
            ParamKind::Public => format!("s:{}:\"{}\";", param.name.len(), param.name),
            ParamKind::Protected => {
                format!("s:{}:\"\0*\0{}\";", param.name.len() + 3, param.name)
            }
            ParamKind::Private => format!(
                "s:{}:\"\0{}\0{}\";",
                job_name.len() + 2,
                job_name,
                param.name
            ),
        };
        encoded.push_str(&name);
        encoded.push_str(&format!("s:{}:\"{}\";", param.value.len(), param.value));
    }
    encoded
}

/// Encode the delay property value: null when there is none, an integer otherwise
pub fn encode_delay(delay_secs: u64) -> String {
    if delay_secs == 0 {
        return "N;".to_string();
    }
    format!("i:{};", delay_secs)
}

/// Encode the whole queued command object for the given job class
pub fn encode_command(config: &DispatchConfig, params: &[JobParam]) -> String {
    format!(
        concat!(
            "O:{}:\"{}\":11:{{",
            "{}",
            "s:3:\"job\";N;",
            "s:10:\"connection\";N;",
            "s:5:\"queue\";s:{}:\"{}\";",
            "s:15:\"chainConnection\";N;",
            "s:10:\"chainQueue\";N;",
            "s:19:\"chainCatchCallbacks\";N;",
            "s:5:\"delay\";{}",
            "s:11:\"afterCommit\";N;",
            "s:10:\"middleware\";a:0:{{}}",
            "s:7:\"chained\";a:0:{{}}",
            "}}",
        ),
        config.job_name.len(),
        config.job_name,
        encode_properties(&config.job_name, params),
        config.queue.len(),
        config.queue,
        encode_delay(config.delay),
    )
}
