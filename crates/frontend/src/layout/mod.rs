pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;

use center::Center;
use left::Sidebar;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |       Center       |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <Center />
            </div>
        </div>
    }
}
