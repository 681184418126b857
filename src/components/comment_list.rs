/// Component to display the comments left on a board.
/// Each comment becomes one block with an avatar, nickname, star rating and body.
use leptos::*;
use leptos::logging::log;
use crate::models::comment::Comment;

pub const PLACEHOLDER_AVATAR_URL: &str = "https://static.remove.bg/remove-bg-web/194d453110e760e94498dbb94c5cfb329903342c/assets/start-1abfb4fe2980eabfbbaaa4365a0692539f7cd2725f324f904565a9a744f8e214.jpg";
pub const STAR_ICON_PATH: &str = "/assets/star.svg";
pub const PLACEHOLDER_BODY: &str = "임시 코멘트 정말 재미있었어요";

/// Static visuals shared by every comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAssets {
    pub avatar_url: String,
    pub star_icon: String,
    pub placeholder_body: String,
}

impl Default for CommentAssets {
    fn default() -> Self {
        Self {
            avatar_url: PLACEHOLDER_AVATAR_URL.to_string(),
            star_icon: STAR_ICON_PATH.to_string(),
            placeholder_body: PLACEHOLDER_BODY.to_string(),
        }
    }
}

/// The strings one comment block shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCard {
    pub avatar_url: String,
    pub nickname: String,
    pub star_icon: String,
    pub rating: String,
    pub body: String,
}

impl CommentCard {
    pub fn from_comment(comment: &Comment, assets: &CommentAssets, show_body: bool) -> Self {
        let body = if show_body {
            comment.body.clone()
        } else {
            assets.placeholder_body.clone()
        };

        CommentCard {
            // Every commenter gets the same avatar for now
            avatar_url: assets.avatar_url.clone(),
            nickname: comment.user_nickname.clone(),
            star_icon: assets.star_icon.clone(),
            rating: comment.rating.as_ref().map(|r| r.to_string()).unwrap_or_default(),
            body,
        }
    }
}

/// Maps comments to cards, keeping input order.
pub fn comment_cards(comments: &[Comment], assets: &CommentAssets, show_body: bool) -> Vec<CommentCard> {
    comments
        .iter()
        .map(|comment| CommentCard::from_comment(comment, assets, show_body))
        .collect()
}

/// Renders one comment block per record, in input order.
#[component]
pub fn CommentList(
    #[prop(into)] comments: MaybeSignal<Vec<Comment>>,
    // Render the real comment text instead of the placeholder sentence.
    #[prop(into, optional)] show_body: MaybeSignal<bool>,
    #[prop(optional)] assets: Option<CommentAssets>,
) -> impl IntoView {
    let assets = assets.unwrap_or_default();

    view! {
        <div class="comments">
            {move || {
                let comments = comments.get();
                log!("[COMMENTS] Rendering {} comments", comments.len());
                comment_cards(&comments, &assets, show_body.get())
                    .into_iter()
                    .map(|card| view! {
                        <div class="comment-block">
                            <div class="comment">
                                <div class="comment-header">
                                    <div class="fl-st">
                                        <div class="image-mask">
                                            <img src=card.avatar_url />
                                        </div>
                                        <div class="username">{ card.nickname }</div>
                                    </div>
                                    <div class="fl-ed">
                                        <div class="rating-container">
                                            <img src=card.star_icon />
                                            <div class="rating">{ card.rating }</div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                            <div class="comment-line"></div>
                            <div class="comment">
                                <div class="comment-body">
                                    <div>{ card.body }</div>
                                </div>
                            </div>
                        </div>
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
