use leptos::prelude::*;
use navhub_domain::listing_card::CardListing;

use crate::api;
use crate::components::{Loading, ServiceCard};

/// Search page: a query box and the matching services as listing cards.
#[component]
pub fn Search() -> impl IntoView {
    let (input, set_input) = signal(String::new());
    let (query, set_query) = signal(String::new());

    let results = LocalResource::new(move || {
        let q = query.get();
        async move {
            if q.is_empty() {
                Ok(Vec::new())
            } else {
                api::search(&q).await
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_query.set(input.get_untracked().trim().to_string());
    };

    view! {
        <div class="search-page">
            <form class="search-form" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="搜索 AI 服务"
                    prop:value=input
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button type="submit">"搜索"</button>
            </form>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    results.read().as_deref().map(|result| match result {
                        Ok(hits) if hits.is_empty() && !query.get_untracked().is_empty() => view! {
                            <p class="empty">"没有找到相关服务"</p>
                        }.into_any(),
                        Ok(hits) => {
                            let cards: Vec<CardListing> = hits.iter().map(CardListing::from).collect();
                            view! {
                                <div class="card-grid">
                                    <For
                                        each=move || cards.clone()
                                        key=|card| (card.id, card.icon.clone())
                                        children=|card| view! { <ServiceCard listing=card/> }
                                    />
                                </div>
                            }.into_any()
                        }
                        Err(err) => view! {
                            <p class="error">{"搜索失败: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
