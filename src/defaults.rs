//! Built-in default documents for the agent.
//!
//! These mirror the stock pipeline the operator ships until a user supplies
//! their own: tail the container logs, enrich records with Kubernetes
//! metadata, and route everything to the null output. The settings document
//! is the header-less enable block that sits next to the main config.

use crate::conf::{ConfigDocument, Directive, Section};

/// Default agent pipeline: SERVICE -> INPUT -> FILTER -> OUTPUT.
pub fn agent_document() -> ConfigDocument {
    ConfigDocument::Sections(vec![
        Section::new("SERVICE")
            .directive("Flush", "1")
            .directive("Daemon", "Off")
            .directive("Log_Level", "info")
            .directive("Parsers_File", "parsers.conf"),
        Section::new("INPUT")
            .directive("Name", "tail")
            .directive("Path", "/var/log/containers/*.log")
            .directive("Parser", "docker")
            .directive("Tag", "kube.*")
            .directive("Refresh_Interval", "5")
            .directive("Mem_Buf_Limit", "5MB")
            .directive("Skip_Long_Lines", "On")
            .directive("DB", "/tail-db/tail-containers-state.db")
            .directive("DB.Sync", "Normal"),
        Section::new("FILTER")
            .directive("Name", "kubernetes")
            .directive("Match", "kube.*")
            .directive("Kube_URL", "https://kubernetes.default.svc:443")
            .directive(
                "Kube_CA_File",
                "/var/run/secrets/kubernetes.io/serviceaccount/ca.crt",
            )
            .directive(
                "Kube_Token_File",
                "/var/run/secrets/kubernetes.io/serviceaccount/token",
            ),
        Section::new("OUTPUT")
            .directive("Name", "null")
            .directive("Match", "*"),
    ])
}

/// Default settings block (bare directives, no section headers).
pub fn settings_document() -> ConfigDocument {
    ConfigDocument::Bare(vec![Directive::new("Enable", "1")])
}
