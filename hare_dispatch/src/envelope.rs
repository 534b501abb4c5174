use serde::{Deserialize, Serialize};

/// Entry point the consumer calls to unserialize and run a queued command
pub const QUEUED_HANDLER: &str = "Illuminate\\Queue\\CallQueuedHandler@call";

/// JSON document pushed to the queue for one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEnvelope {
    pub uuid: String,
    pub display_name: String,
    pub job: String,
    pub max_tries: Option<u32>,
    pub max_exceptions: Option<u32>,
    pub fail_on_timeout: bool,
    pub backoff: Option<u64>,
    pub timeout: Option<u64>,
    pub retry_until: Option<i64>,
    pub data: CommandData,
    pub id: String,
    pub attempts: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub tags: Vec<String>,
    pub silenced: bool,
    pub pushed_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandData {
    pub command_name: String,
    pub command: String,
}

impl JobEnvelope {
    /// Envelope for a first attempt of the given serialized command
    pub fn new(job_id: &str, job_name: &str, command: String, pushed_at: i64) -> Self {
        Self {
            uuid: job_id.to_string(),
            display_name: job_name.to_string(),
            job: QUEUED_HANDLER.to_string(),
            max_tries: None,
            max_exceptions: None,
            fail_on_timeout: false,
            backoff: None,
            timeout: None,
            retry_until: None,
            data: CommandData {
                command_name: job_name.to_string(),
                command,
            },
            id: job_id.to_string(),
            attempts: 0,
            kind: "job".to_string(),
            tags: Vec::new(),
            silenced: false,
            pushed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape() {
        let envelope = JobEnvelope::new("abc", "testJob", "O:7:\"testJob\":11:{}".to_string(), 42);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "uuid": "abc",
                "displayName": "testJob",
                "job": "Illuminate\\Queue\\CallQueuedHandler@call",
                "maxTries": null,
                "maxExceptions": null,
                "failOnTimeout": false,
                "backoff": null,
                "timeout": null,
                "retryUntil": null,
                "data": {
                    "commandName": "testJob",
                    "command": "O:7:\"testJob\":11:{}"
                },
                "id": "abc",
                "attempts": 0,
                "type": "job",
                "tags": [],
                "silenced": false,
                "pushedAt": 42
            })
        );
    }

    #[test]
    fn null_bytes_are_escaped() {
        let envelope = JobEnvelope::new("abc", "J", "s:3:\"\0J\0x\";".to_string(), 42);
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains(r#""command":"s:3:\"\u0000J\u0000x\";""#));
        let back: JobEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(back, envelope);
    }
}
