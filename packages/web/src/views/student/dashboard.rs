use api::models::Role;
use dioxus::prelude::*;
use futures::join;
use ui::{format, use_api, use_auth, EmptyState, Spinner};

use crate::views::DashboardLayout;
use crate::Route;

/// Student home: a few counters plus the latest notices and the next
/// events. Each section tolerates its own fetch failing; the others still
/// render.
#[component]
pub fn StudentDashboard() -> Element {
    let auth = use_auth();
    let client = use_api();

    let overview = use_resource(move || {
        let client = client.clone();
        async move {
            let (stats, notices, events) = join!(
                client.fetch_stats(),
                client.recent_notices(5),
                client.upcoming_events(3),
            );
            (
                stats.unwrap_or_default(),
                notices.unwrap_or_default(),
                events.unwrap_or_default(),
            )
        }
    });

    let greeting = auth()
        .user
        .map(|user| user.name)
        .unwrap_or_else(|| "Student".to_string());

    rsx! {
        DashboardLayout { require: Role::Student, active_path: "/student/dashboard",
            div { class: "page-header",
                h1 { class: "page-title", "Welcome back, {greeting}" }
                p { class: "page-sub", "Here is what is happening on campus." }
            }

            match &*overview.read() {
                None => rsx! { Spinner {} },
                Some((stats, notices, events)) => rsx! {
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
                    }

                    div { class: "panel-grid",
                        section { class: "panel",
                            div { class: "panel-head",
                                h2 { "Recent notices" }
                                Link { to: Route::StudentNotices {}, "View all" }
                            }
                            if notices.is_empty() {
                                EmptyState { message: "No notices yet" }
                            } else {
                                ul { class: "panel-list",
                                    for notice in notices {
                                        li { key: "{notice.id}", class: "panel-row",
                                            span { class: format::category_badge_class(notice.category.as_str()),
                                                "{notice.category.as_str()}"
                                            }
                                            span { class: "panel-row-title", "{notice.title}" }
                                            span { class: "panel-row-meta",
                                                "{format::format_date(notice.created_at.as_ref())}"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        section { class: "panel",
                            div { class: "panel-head",
                                h2 { "Upcoming events" }
                                Link { to: Route::StudentEvents {}, "View all" }
                            }
                            if events.is_empty() {
                                EmptyState { message: "Nothing scheduled" }
                            } else {
                                ul { class: "panel-list",
                                    for event in events {
                                        li { key: "{event.id}", class: "panel-row",
                                            span { class: "panel-row-title", "{event.title}" }
                                            span { class: "panel-row-meta",
                                                "{format::format_date(event.date.as_ref())}"
                                                if !event.venue.is_empty() { " \u{00b7} {event.venue}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
