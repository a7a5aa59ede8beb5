//! Console output formatter for resolved experiment configuration

use colored::Colorize;
use experiments_application::ResolvedPurchaseIntent;
use experiments_domain::{ConfigIssue, KnownExperiment, PURCHASE_INTENT, format_duration};
use serde_json::json;

/// Formats resolved configuration for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format as human-readable text
    pub fn format(resolved: &ResolvedPurchaseIntent) -> String {
        let config = &resolved.config;
        let mut output = String::new();

        let state = if config.is_enabled() {
            "enabled".green().bold()
        } else {
            "disabled".red().bold()
        };
        output.push_str(&format!(
            "{} {}\n",
            format!("{}:", PURCHASE_INTENT.key()).cyan().bold(),
            state
        ));

        output.push_str(&format!(
            "  {:<18}{}\n",
            "resource_version",
            config.resource_version()
        ));
        output.push_str(&format!("  {:<18}{}\n", "threshold", config.threshold()));
        output.push_str(&format!(
            "  {:<18}{}\n",
            "time_window",
            format_duration(config.time_window())
        ));

        if !resolved.issues.is_empty() {
            output.push('\n');
            output.push_str(&Self::format_issues(&resolved.issues));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(resolved: &ResolvedPurchaseIntent) -> String {
        let config = &resolved.config;
        let value = json!({
            "experiment": PURCHASE_INTENT.key(),
            "enabled": config.is_enabled(),
            "resource_version": config.resource_version(),
            "threshold": config.threshold(),
            "time_window": format_duration(config.time_window()),
            "time_window_secs": config.time_window().as_secs(),
            "issues": resolved
                .issues
                .iter()
                .map(|issue| json!({
                    "severity": issue.severity.to_string(),
                    "message": issue.message,
                }))
                .collect::<Vec<_>>(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the known experiments and the parameters each one accepts
    pub fn format_known_experiments(experiments: &[KnownExperiment]) -> String {
        let mut output = String::new();
        for known in experiments {
            let default_state = if known.descriptor.enabled_by_default() {
                "on by default"
            } else {
                "off by default"
            };
            output.push_str(&format!(
                "{} {} ({})\n",
                known.descriptor.key().cyan().bold(),
                known.description,
                default_state
            ));
            for parameter in known.parameters {
                output.push_str(&format!(
                    "  --param {}:{}=<VALUE>\n",
                    known.descriptor.key(),
                    parameter
                ));
            }
        }
        output
    }

    /// Format configuration issues, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                let label = if issue.is_error() {
                    "error:".red().bold()
                } else {
                    "warning:".yellow().bold()
                };
                format!("{} {}\n", label, issue.message)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use experiments_domain::{ConfigIssueCode, ExperimentParams, PurchaseIntentConfig, Severity};

    fn resolved(enabled: bool, params: ExperimentParams) -> ResolvedPurchaseIntent {
        let (config, issues) = PurchaseIntentConfig::resolve(enabled, &params);
        ResolvedPurchaseIntent { config, issues }
    }

    #[test]
    fn test_format_text_lists_parameters() {
        let output = ConsoleFormatter::format(&resolved(
            true,
            ExperimentParams::new().with("threshold", "5"),
        ));
        assert!(output.contains("purchase_intent:"));
        assert!(output.contains("enabled"));
        assert!(output.contains("threshold         5"));
        assert!(output.contains("time_window       1w"));
    }

    #[test]
    fn test_format_text_disabled() {
        let output = ConsoleFormatter::format(&resolved(
            false,
            ExperimentParams::new().with("threshold", "5"),
        ));
        assert!(output.contains("disabled"));
        assert!(output.contains("threshold         3"));
    }

    #[test]
    fn test_format_json() {
        let output = ConsoleFormatter::format_json(&resolved(
            true,
            ExperimentParams::new()
                .with("time_window", "1d")
                .with("resource_version", "x"),
        ));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["experiment"], "purchase_intent");
        assert_eq!(value["enabled"], true);
        assert_eq!(value["resource_version"], 1);
        assert_eq!(value["time_window"], "1d");
        assert_eq!(value["time_window_secs"], 86_400);
        assert_eq!(value["issues"][0]["severity"], "warning");
    }

    #[test]
    fn test_format_known_experiments_lists_parameters() {
        let output =
            ConsoleFormatter::format_known_experiments(experiments_domain::known_experiments());
        assert!(output.contains("Purchase intent targeting (on by default)"));
        assert!(output.contains("--param purchase_intent:resource_version=<VALUE>"));
        assert!(output.contains("--param purchase_intent:threshold=<VALUE>"));
        assert!(output.contains("--param purchase_intent:time_window=<VALUE>"));
    }

    #[test]
    fn test_format_issues_one_per_line() {
        let issues = vec![
            ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::UnknownExperiment {
                    experiment: "a".to_string(),
                },
                message: "first".to_string(),
            },
            ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ConflictingOverride {
                    experiment: "b".to_string(),
                },
                message: "second".to_string(),
            },
        ];
        let output = ConsoleFormatter::format_issues(&issues);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("first"));
        assert!(output.contains("second"));
    }
}
