use yew::prelude::*;

use crate::components::seo::Seo;
use crate::utils::scroll::use_scroll_to_top;

struct Post {
    tag: &'static str,
    title: &'static str,
    excerpt: &'static str,
    date: &'static str,
    read_minutes: u32,
}

const POSTS: [Post; 4] = [
    Post {
        tag: "Commuting",
        title: "What a shared auto actually saves you in a semester",
        excerpt: "We ran the numbers on a typical 6km college commute. The answer paid for a laptop.",
        date: "Mar 12, 2025",
        read_minutes: 5,
    },
    Post {
        tag: "Product",
        title: "Why we ask for ₹1 before you ride",
        excerpt: "A tiny commitment changed our no-show rate more than any reminder notification.",
        date: "Feb 27, 2025",
        read_minutes: 4,
    },
    Post {
        tag: "Safety",
        title: "How rider verification works",
        excerpt: "College and work IDs, selfie checks and what we never store.",
        date: "Feb 10, 2025",
        read_minutes: 6,
    },
    Post {
        tag: "Climate",
        title: "Carbon Coins, explained",
        excerpt: "How we estimate the emissions you avoid on every shared kilometre.",
        date: "Jan 22, 2025",
        read_minutes: 3,
    },
];

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_to_top();
    html! {
        <div class="blog-page">
            <Seo
                title="Blog"
                description="Stories, product notes and commute maths from the Spllit team."
            />
            <header class="page-header">
                <h1>{"The Spllit "}<span class="accent">{"Blog"}</span></h1>
                <p>{"Stories, product notes and commute maths from the team."}</p>
            </header>
            <section class="container post-grid">
                {
                    POSTS.iter().map(|post| html! {
                        <article class="post-card">
                            <span class="post-tag">{post.tag}</span>
                            <h3>{post.title}</h3>
                            <p>{post.excerpt}</p>
                            <div class="post-meta">
                                <span>{post.date}</span>
                                <span>{format!("{} min read", post.read_minutes)}</span>
                            </div>
                        </article>
                    }).collect::<Html>()
                }
            </section>
        </div>
    }
}
