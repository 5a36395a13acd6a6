//! Built-in template set renderer.
//!
//! Implements the `TemplateRenderer` port over the skeletons in
//! [`skeletons`]. Rendering is pure: file paths come from the resolved
//! layout, contents from the render context, and nothing touches the
//! filesystem here.

mod skeletons;

use tracing::instrument;

use entigen_core::{
    application::ports::TemplateRenderer,
    domain::{
        EntityDescriptor, ProjectLayout, RenderContext, RenderedFile, ServiceParameters,
        TemplateKind,
    },
    error::EntigenResult,
};

/// Renderer backed by the built-in skeleton set.
pub struct TemplateSetRenderer;

impl TemplateSetRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TemplateSetRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TemplateSetRenderer {
    #[instrument(skip_all, fields(kind = %kind, entity = %descriptor.name.pascal()))]
    fn render(
        &self,
        kind: TemplateKind,
        descriptor: &EntityDescriptor,
        params: &ServiceParameters,
        layout: &ProjectLayout,
    ) -> EntigenResult<Vec<RenderedFile>> {
        let ctx = RenderContext::new(descriptor, params);
        let pascal = descriptor.name.pascal();
        let kebab = descriptor.name.kebab();

        let files = match kind {
            TemplateKind::Dto => vec![
                RenderedFile::new(
                    kind,
                    layout
                        .dto_request_dir()
                        .join(format!("Create{pascal}Request.cs")),
                    ctx.render(skeletons::CREATE_REQUEST),
                ),
                RenderedFile::new(
                    kind,
                    layout
                        .dto_request_dir()
                        .join(format!("Update{pascal}Request.cs")),
                    ctx.render(skeletons::UPDATE_REQUEST),
                ),
                RenderedFile::new(
                    kind,
                    layout
                        .dto_response_dir()
                        .join(format!("{pascal}Response.cs")),
                    ctx.render(skeletons::RESPONSE),
                ),
            ],
            TemplateKind::ServiceInterface => vec![RenderedFile::new(
                kind,
                layout.interfaces_dir().join(format!("I{pascal}Service.cs")),
                ctx.render(skeletons::SERVICE_INTERFACE),
            )],
            TemplateKind::Controller => vec![
                RenderedFile::new(
                    kind,
                    layout
                        .controllers_dir()
                        .join(format!("{}Controller.cs", descriptor.name.plural_pascal())),
                    ctx.render(&skeletons::controller()),
                )
                .with_merge_block(ctx.render(skeletons::CONTROLLER_ACTIONS)),
            ],
            TemplateKind::ComponentSet => {
                let pages = layout.components_pages_dir();
                let mut files: Vec<RenderedFile> = [
                    ("index", skeletons::COMPONENT_INDEX),
                    ("create", skeletons::COMPONENT_CREATE),
                    ("edit", skeletons::COMPONENT_EDIT),
                    ("detail", skeletons::COMPONENT_DETAIL),
                ]
                .into_iter()
                .map(|(page, body)| {
                    RenderedFile::new(
                        kind,
                        pages.join(format!("{kebab}-{page}.component.ts")),
                        ctx.render(body),
                    )
                })
                .collect();

                files.push(
                    RenderedFile::new(
                        kind,
                        layout.routes_file(),
                        ctx.render(&skeletons::routes_file()),
                    )
                    .with_merge_block(ctx.render(skeletons::ROUTE_ENTRIES)),
                );
                files
            }
        };

        Ok(files)
    }
}
