//! Presentational list rows and badges.

use api::JobSummary;
use dioxus::prelude::*;

#[component]
pub fn JobCard(job: JobSummary) -> Element {
    rsx! {
        div {
            class: "job-card",
            div {
                class: "job-card-main",
                h3 { "{job.title}" }
                p {
                    class: "job-card-company",
                    "{job.company} · {job.location}"
                }
            }
            span { class: "job-card-type", "{job.employment_type}" }
        }
    }
}

/// Colored badge for an application status.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let class = match status.as_str() {
        "accepted" => "status-badge status-badge--accepted",
        "rejected" => "status-badge status-badge--rejected",
        "in_review" => "status-badge status-badge--review",
        _ => "status-badge status-badge--submitted",
    };

    rsx! {
        span { class: "{class}", "{status}" }
    }
}
