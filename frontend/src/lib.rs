use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

use components::layout::Layout;
use pages::{attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(api::ApiClient::new());
    state::theme::provide_theme();

    view! {
        <Title text="HRMS"/>
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=DashboardPage/>
                    <Route path="/employees" view=EmployeesPage/>
                    <Route path="/attendance" view=AttendancePage/>
                </Routes>
            </Layout>
        </Router>
    }
}
