use crate::api::AttendanceStatus;
use leptos::*;

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    let badge_class = match status {
        AttendanceStatus::Present => {
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium bg-status-success-bg text-status-success-text border border-status-success-border"
        }
        AttendanceStatus::Absent => {
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium bg-status-error-bg text-status-error-text border border-status-error-border"
        }
    };

    view! {
        <span class=badge_class>{status.as_str()}</span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badge_shows_status_text() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <StatusBadge status=AttendanceStatus::Present />
                    <StatusBadge status=AttendanceStatus::Absent />
                </div>
            }
        });
        assert!(html.contains("Present"));
        assert!(html.contains("Absent"));
    }
}
