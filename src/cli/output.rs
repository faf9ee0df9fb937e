//! Output formatting utilities for the CLI.

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result on stdout
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
    }

    impl CommandOutput for Sample {
        fn to_human(&self) -> String {
            format!("Name: {}", self.name)
        }

        fn to_json(&self) -> serde_json::Value {
            serde_json::to_value(self).unwrap_or_default()
        }
    }

    #[test]
    fn test_command_output_renders_both_modes() {
        let sample = Sample {
            name: "demo".to_string(),
        };
        assert_eq!(sample.to_human(), "Name: demo");
        assert_eq!(sample.to_json()["name"], "demo");
    }
}
