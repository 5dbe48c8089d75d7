use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"页面不存在"</p>
            <p>
                <a href="/">"返回首页"</a>
            </p>
        </div>
    }
}
