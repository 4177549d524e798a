use yew::prelude::*;

use crate::theme::ThemeAction;
use crate::view::{PageView, ViewHandle};

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogProject {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub theme: &'static str,
}

pub const PROJECTS: &[CatalogProject] = &[
    CatalogProject {
        id: "ai-vision",
        title: "Neural Vision Suite",
        summary: "Image classification + interpretability demos.",
        tags: &["AI", "Computer Vision", "PyTorch"],
        theme: "dark",
    },
    CatalogProject {
        id: "ds-dashboard",
        title: "DataSense Dashboard",
        summary: "Interactive analytics with real-time charts.",
        tags: &["Data Science", "Dashboards", "Pandas"],
        theme: "purple",
    },
    CatalogProject {
        id: "automation",
        title: "AutoFlow",
        summary: "Automation pipelines for ETL and orchestration.",
        tags: &["Automation", "Python", "Airflow"],
        theme: "green",
    },
];

pub fn open_notice(id: &str) -> String {
    format!("Open project: {} (replace with modal or detailed view)", id)
}

/// Handles "View project": switches to the card's theme when it declares
/// one, then shows the placeholder notice.
pub fn open_project(view: &dyn PageView, id: &str, theme: Option<&str>, dispatch: impl FnOnce(ThemeAction)) {
    if let Some(theme) = theme.filter(|t| !t.is_empty()) {
        dispatch(ThemeAction::CardOpened { theme: Some(theme.to_string()) });
    }
    view.notify(&open_notice(id));
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: CatalogProject,
    pub view: ViewHandle,
    pub on_theme: Callback<ThemeAction>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let on_view = {
        let view = props.view.clone();
        let on_theme = props.on_theme.clone();
        let id = project.id;
        let theme = project.theme;
        Callback::from(move |_: MouseEvent| {
            open_project(&*view, id, Some(theme), |action| on_theme.emit(action));
        })
    };

    html! {
        <article class="card" id={project.id} data-id={project.id} data-theme={project.theme}>
            <h3>{ project.title }</h3>
            <p>{ project.summary }</p>
            <ul class="card-tags">
                { for project.tags.iter().map(|tag| html! { <li>{ *tag }</li> }) }
            </ul>
            <button class="view-project" data-id={project.id} onclick={on_view}>
                { "View project" }
            </button>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::{RecordingView, ViewEvent};

    #[test]
    fn opening_a_card_switches_theme_and_notifies() {
        let view = RecordingView::default();
        let mut actions = Vec::new();
        open_project(&view, "ds-dashboard", Some("purple"), |a| actions.push(a));
        assert_eq!(actions, vec![ThemeAction::CardOpened { theme: Some("purple".into()) }]);
        assert_eq!(
            view.events(),
            vec![ViewEvent::Notice(
                "Open project: ds-dashboard (replace with modal or detailed view)".into()
            )]
        );
    }

    #[test]
    fn card_without_theme_only_notifies() {
        let view = RecordingView::default();
        let mut actions = Vec::new();
        open_project(&view, "automation", None, |a| actions.push(a));
        open_project(&view, "automation", Some(""), |a| actions.push(a));
        assert!(actions.is_empty());
        assert_eq!(view.events().len(), 2);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
