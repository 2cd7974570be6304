use api::models::Role;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use futures::join;
use ui::{format, use_api, EmptyState, Spinner};

use crate::views::DashboardLayout;
use crate::Route;

fn ago(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(at) => format::time_ago(at, Utc::now()),
        None => "N/A".to_string(),
    }
}

/// Admin home: counters for every collection plus the latest records in
/// each, so a moderator can see where attention is needed.
#[component]
pub fn AdminDashboard() -> Element {
    let client = use_api();

    let overview = use_resource(move || {
        let client = client.clone();
        async move {
            let (stats, activity) = join!(client.fetch_stats(), client.fetch_activity());
            (stats.unwrap_or_default(), activity.unwrap_or_default())
        }
    });

    rsx! {
        DashboardLayout { require: Role::Admin, active_path: "/admin/dashboard",
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-sub", "Everything on campus at a glance." }
            }

            match &*overview.read() {
                None => rsx! { Spinner {} },
                Some((stats, activity)) => rsx! {
                    div { class: "stat-grid",
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_notices}" }
                            span { class: "stat-label", "Notices" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_events}" }
                            span { class: "stat-label", "Events" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.upcoming_events}" }
                            span { class: "stat-label", "Upcoming events" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.pending_lost_found}" }
                            span { class: "stat-label", "Pending posts" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.pending_feedback}" }
                            span { class: "stat-label", "Open feedback" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_students}" }
                            span { class: "stat-label", "Students" }
                        }
                    }

                    div { class: "panel-grid",
                        section { class: "panel",
                            div { class: "panel-head",
                                h2 { "Latest notices" }
                                Link { to: Route::AdminNotices {}, "Manage" }
                            }
                            if activity.notices.is_empty() {
                                EmptyState { message: "No notices yet" }
                            } else {
                                ul { class: "panel-list",
                                    for notice in &activity.notices {
                                        li { key: "{notice.id}", class: "panel-row",
                                            span { class: format::category_badge_class(notice.category.as_str()),
                                                "{notice.category.as_str()}"
                                            }
                                            span { class: "panel-row-title", "{notice.title}" }
                                            span { class: "panel-row-meta", "{ago(notice.created_at.as_ref())}" }
                                        }
                                    }
                                }
                            }
                        }

                        section { class: "panel",
                            div { class: "panel-head",
                                h2 { "Latest events" }
                                Link { to: Route::AdminEvents {}, "Manage" }
                            }
                            if activity.events.is_empty() {
                                EmptyState { message: "No events yet" }
                            } else {
                                ul { class: "panel-list",
                                    for event in &activity.events {
                                        li { key: "{event.id}", class: "panel-row",
                                            span { class: "panel-row-title", "{event.title}" }
                                            span { class: "panel-row-meta",
                                                "{format::format_date(event.date.as_ref())}"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        section { class: "panel",
                            div { class: "panel-head",
                                h2 { "Latest lost & found" }
                                Link { to: Route::AdminLostFound {}, "Moderate" }
                            }
                            if activity.lost_found.is_empty() {
                                EmptyState { message: "No reports yet" }
                            } else {
                                ul { class: "panel-list",
                                    for post in &activity.lost_found {
                                        li { key: "{post.id}", class: "panel-row",
                                            span { class: format::lostfound_badge_class(post.status),
                                                "{post.status.as_str()}"
                                            }
                                            span { class: "panel-row-title", "{post.item_name}" }
                                            span { class: "panel-row-meta", "{ago(post.created_at.as_ref())}" }
                                        }
                                    }
                                }
                            }
                        }

                        section { class: "panel",
                            div { class: "panel-head",
                                h2 { "Latest feedback" }
                                Link { to: Route::AdminFeedback {}, "Review" }
                            }
                            if activity.feedback.is_empty() {
                                EmptyState { message: "No feedback yet" }
                            } else {
                                ul { class: "panel-list",
                                    for item in &activity.feedback {
                                        li { key: "{item.id}", class: "panel-row",
                                            span { class: format::feedback_badge_class(item.status),
                                                "{item.status.as_str()}"
                                            }
                                            span { class: "panel-row-title", "{item.subject}" }
                                            span { class: "panel-row-meta", "{item.author_label()}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
