use log::error;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::api::{self, NetworkFailure, Project, RecommendResponse};
use crate::view::{PageView, ScrollAlign, ViewHandle};

pub const PROMPT_TEXT: &str = "Type what you're interested in.";
pub const LOADING_TEXT: &str = "Loading...";
pub const NETWORK_ERROR_TEXT: &str = "Network error.";

/// What the output area currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RecommendOutput {
    #[default]
    Empty,
    Prompt,
    Loading,
    Error(String),
    NetworkError,
    Found(Project),
}

impl RecommendOutput {
    /// Validates the query. On success the output switches to loading and
    /// the trimmed query is returned for sending.
    pub fn submit(&mut self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            *self = RecommendOutput::Prompt;
            return None;
        }
        *self = RecommendOutput::Loading;
        Some(query.to_string())
    }

    /// Applies a finished request. A found project is scrolled to when the
    /// page has an element with its id.
    pub fn resolve(&mut self, outcome: Result<RecommendResponse, NetworkFailure>, view: &dyn PageView) {
        *self = match outcome {
            Ok(response) => match (api::reported_error(&response.error), response.project) {
                (Some(error), _) => RecommendOutput::Error(error.to_string()),
                (None, Some(project)) => {
                    view.scroll_to(&project.id, ScrollAlign::Center);
                    RecommendOutput::Found(project)
                }
                (None, None) => {
                    error!("Recommendation response carried neither a project nor an error");
                    RecommendOutput::NetworkError
                }
            },
            Err(NetworkFailure) => RecommendOutput::NetworkError,
        };
    }

    pub fn message(&self) -> Option<String> {
        match self {
            RecommendOutput::Empty | RecommendOutput::Found(_) => None,
            RecommendOutput::Prompt => Some(PROMPT_TEXT.to_string()),
            RecommendOutput::Loading => Some(LOADING_TEXT.to_string()),
            RecommendOutput::Error(error) => Some(format!("Error: {}", error)),
            RecommendOutput::NetworkError => Some(NETWORK_ERROR_TEXT.to_string()),
        }
    }
}

pub fn tag_line(project: &Project) -> String {
    format!("tags: {}", project.tags.join(", "))
}

#[derive(Properties, PartialEq)]
pub struct RecommendWidgetProps {
    pub view: ViewHandle,
}

pub enum RecommendWidgetMsg {
    SetQuery(String),
    Recommend,
    Resolved(Result<RecommendResponse, NetworkFailure>),
}

pub struct RecommendWidget {
    query: String,
    output: RecommendOutput,
}

impl Component for RecommendWidget {
    type Message = RecommendWidgetMsg;
    type Properties = RecommendWidgetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            query: String::new(),
            output: RecommendOutput::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RecommendWidgetMsg::SetQuery(query) => {
                self.query = query;
                true
            }
            RecommendWidgetMsg::Recommend => {
                if let Some(intent) = self.output.submit(&self.query) {
                    ctx.link().send_future(async move {
                        match api::request_recommendation(intent).await {
                            Ok(response) => RecommendWidgetMsg::Resolved(Ok(response)),
                            Err(e) => {
                                error!("Recommendation request failed: {}", e);
                                RecommendWidgetMsg::Resolved(Err(NetworkFailure))
                            }
                        }
                    });
                }
                true
            }
            RecommendWidgetMsg::Resolved(outcome) => {
                self.output.resolve(outcome, &*ctx.props().view);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(RecommendWidgetMsg::Recommend)
        });

        html! {
            <div class="recommend-widget">
                <div class="recommend-controls">
                    <input
                        id="reco-q"
                        type="text"
                        placeholder="e.g. computer vision, dashboards, ETL"
                        value={self.query.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            RecommendWidgetMsg::SetQuery(input.value())
                        })}
                        {onkeydown}
                    />
                    <button id="reco-btn" onclick={ctx.link().callback(|_| RecommendWidgetMsg::Recommend)}>
                        { "Recommend" }
                    </button>
                </div>
                <div id="reco-output" class="recommend-output">
                    {
                        match &self.output {
                            RecommendOutput::Found(project) => html! {
                                <>
                                    <strong>{ &project.title }</strong>
                                    <p>{ &project.summary }</p>
                                    <small>{ tag_line(project) }</small>
                                </>
                            },
                            other => html! { { other.message().unwrap_or_default() } },
                        }
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::{RecordingView, ViewEvent};

    fn decoded(json: &str) -> Result<RecommendResponse, NetworkFailure> {
        Ok(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn empty_query_prompts_without_request() {
        let mut output = RecommendOutput::default();
        assert_eq!(output.submit("  "), None);
        assert_eq!(output, RecommendOutput::Prompt);
        assert_eq!(output.message().as_deref(), Some(PROMPT_TEXT));
    }

    #[test]
    fn valid_query_shows_loading() {
        let mut output = RecommendOutput::default();
        assert_eq!(output.submit(" databases "), Some("databases".to_string()));
        assert_eq!(output.message().as_deref(), Some(LOADING_TEXT));
    }

    #[test]
    fn found_project_renders_and_scrolls_into_center() {
        let view = RecordingView::with_elements(&["p1"]);
        let mut output = RecommendOutput::default();
        output.submit("databases");
        output.resolve(
            decoded(r#"{"project":{"id":"p1","title":"T","summary":"S","tags":["a","b"]}}"#),
            &view,
        );

        let RecommendOutput::Found(project) = &output else {
            panic!("expected a project, got {:?}", output);
        };
        assert_eq!(project.title, "T");
        assert_eq!(project.summary, "S");
        assert_eq!(tag_line(project), "tags: a, b");
        assert_eq!(view.events(), vec![ViewEvent::Scrolled("p1".into(), ScrollAlign::Center)]);
    }

    #[test]
    fn found_project_without_element_does_not_scroll() {
        let view = RecordingView::default();
        let mut output = RecommendOutput::default();
        output.resolve(
            decoded(r#"{"project":{"id":"p1","title":"T","summary":"S","tags":[]}}"#),
            &view,
        );
        assert!(matches!(output, RecommendOutput::Found(_)));
        assert!(view.events().is_empty());
    }

    #[test]
    fn backend_error_is_shown() {
        let view = RecordingView::default();
        let mut output = RecommendOutput::Loading;
        output.resolve(decoded(r#"{"error":"no intent provided"}"#), &view);
        assert_eq!(output.message().as_deref(), Some("Error: no intent provided"));
    }

    #[test]
    fn transport_failure_shows_network_error() {
        let view = RecordingView::default();
        let mut output = RecommendOutput::Loading;
        output.resolve(Err(NetworkFailure), &view);
        assert_eq!(output.message().as_deref(), Some(NETWORK_ERROR_TEXT));
        assert!(view.events().is_empty());
    }

    #[test]
    fn reply_without_project_or_error_counts_as_network_error() {
        let view = RecordingView::with_elements(&["p1"]);
        let mut output = RecommendOutput::Loading;
        output.resolve(decoded("{}"), &view);
        assert_eq!(output, RecommendOutput::NetworkError);
        assert_eq!(output.message().as_deref(), Some(NETWORK_ERROR_TEXT));
        assert!(view.events().is_empty());
    }
}
