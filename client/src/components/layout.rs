//! Authenticated shell: collapsible sidebar, header with logout, routed outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders inside `DashboardLayout`, which installs the
//! protected-route guard once for all of them. Nothing below the outlet
//! renders until the session is known to be authenticated.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::auth::{RouteAccess, end_session, install_session_guard};

/// A sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Top-level sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    Group { key: &'static str, label: &'static str, icon: &'static str, children: &'static [NavLink] },
}

const REPORT_LINKS: &[NavLink] = &[NavLink { path: "/lalin-perday-report", label: "Laporan Perhari", icon: "🗺" }];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::Link(NavLink { path: "/", label: "Dashboard", icon: "⌂" }),
    NavItem::Group { key: "report", label: "Laporan Lalin", icon: "📄", children: REPORT_LINKS },
    NavItem::Link(NavLink { path: "/master-gerbang", label: "Master Gerbang", icon: "⌂" }),
];

pub fn is_active(link: &NavLink, path: &str) -> bool {
    link.path == path
}

/// Keys of the groups that should be expanded for `path`.
pub fn groups_for_path(path: &str) -> Vec<&'static str> {
    NAV_ITEMS
        .iter()
        .filter_map(|item| match item {
            NavItem::Group { key, children, .. } if children.iter().any(|c| is_active(c, path)) => Some(*key),
            _ => None,
        })
        .collect()
}

/// Flip `key` in the set of open groups.
pub fn toggle_group(open: &mut Vec<&'static str>, key: &'static str) {
    if let Some(index) = open.iter().position(|k| *k == key) {
        open.remove(index);
    } else {
        open.push(key);
    }
}

fn link_class(active: bool) -> &'static str {
    if active { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

/// Layout for all protected routes.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_session_guard(session, RouteAccess::Protected, use_navigate());

    let location = use_location();
    let sidebar_open = RwSignal::new(true);
    let open_groups = RwSignal::new(Vec::<&'static str>::new());

    // Route changes re-derive which groups are expanded.
    Effect::new(move || {
        let path = location.pathname.get();
        open_groups.set(groups_for_path(&path));
    });

    let on_logout = move |_| end_session(session);

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="layout layout--pending">
                        <p>{move || if session.get().is_known() { "Redirecting to login..." } else { "Loading..." }}</p>
                    </div>
                }
            }
        >
            <div class=move || if sidebar_open.get() { "layout" } else { "layout layout--collapsed" }>
                <aside class="sidebar">
                    <div class="sidebar__brand">
                        <h4 class="sidebar__title">"Toll Gate"</h4>
                        <button
                            class="btn sidebar__toggle"
                            title="Toggle sidebar"
                            on:click=move |_| sidebar_open.update(|open| *open = !*open)
                        >
                            "☰"
                        </button>
                    </div>
                    <nav class="sidebar__nav">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| match *item {
                                NavItem::Link(link) => view! { <SidebarLink link=link sidebar_open=sidebar_open/> }.into_any(),
                                NavItem::Group { key, label, icon, children } => {
                                    let is_open = move || open_groups.get().contains(&key);
                                    view! {
                                        <div class="sidebar__group">
                                            <button
                                                class=move || if is_open() { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
                                                on:click=move |_| open_groups.update(|open| toggle_group(open, key))
                                            >
                                                <span class="sidebar__icon">{icon}</span>
                                                <Show when=move || sidebar_open.get()>
                                                    <span class="sidebar__label">{label}</span>
                                                    <span class="sidebar__chevron">{move || if is_open() { "▴" } else { "▾" }}</span>
                                                </Show>
                                            </button>
                                            <Show when=is_open>
                                                <div class="sidebar__children">
                                                    {children
                                                        .iter()
                                                        .map(|child| view! { <SidebarLink link=*child sidebar_open=sidebar_open/> })
                                                        .collect_view()}
                                                </div>
                                            </Show>
                                        </div>
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()}
                    </nav>
                </aside>
                <div class="layout__main">
                    <header class="layout__header">
                        <span class="layout__spacer"></span>
                        <button class="btn layout__logout" on:click=on_logout title="Logout">
                            "⎋ Logout"
                        </button>
                    </header>
                    <main class="layout__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SidebarLink(link: NavLink, sidebar_open: RwSignal<bool>) -> impl IntoView {
    let location = use_location();
    let class = move || link_class(is_active(&link, &location.pathname.get()));

    view! {
        <a href=link.path class=class>
            <span class="sidebar__icon">{link.icon}</span>
            <Show when=move || sidebar_open.get()>
                <span class="sidebar__label">{link.label}</span>
            </Show>
        </a>
    }
}
