//! Markup output of a [`CarouselView`].
//!
//! Buttons carry `data-carousel-action` (and `data-carousel-index` for dots) so a
//! host page can route clicks back through [`crate::Carousel::dispatch`].

use std::fmt;

use crate::state::Action;
use crate::view::{ARROW_GLYPH, Button, CarouselView};

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn action_attributes(action: Action) -> String {
    match action {
        Action::GoTo(index) => format!(r#"data-carousel-action="{}" data-carousel-index="{index}""#, action.attribute()),
        _ => format!(r#"data-carousel-action="{}""#, action.attribute()),
    }
}

fn write_button(out: &mut fmt::Formatter<'_>, button: &Button) -> fmt::Result {
    writeln!(
        out,
        r#"    <button type="button" {} class="{}"><div class="{}">{ARROW_GLYPH}</div></button>"#,
        action_attributes(button.action),
        escape(&button.classes),
        escape(&button.glyph_classes),
    )
}

/// Displays a view as markup.
pub struct Markup<'a>(pub &'a CarouselView);

pub fn render(view: &CarouselView) -> String {
    Markup(view).to_string()
}

impl fmt::Display for Markup<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(
            out,
            r#"<div class="{}" style="height: {}; width: {};">"#,
            escape(&view.root_classes),
            escape(&view.height),
            escape(&view.width),
        )?;

        writeln!(out, r#"  <div class="{}">"#, view.stack_classes)?;
        for layer in &view.layers {
            writeln!(
                out,
                r#"    <img src="{}" alt="{}" class="{}">"#,
                escape(&layer.source),
                escape(&layer.alt),
                escape(&layer.classes),
            )?;
        }
        writeln!(out, "  </div>")?;

        if let Some(caption) = &view.caption {
            writeln!(
                out,
                r#"  <div class="{}"><span class="{}">{}</span></div>"#,
                caption.wrapper_classes,
                escape(&caption.classes),
                escape(&caption.text),
            )?;
        }

        if let Some(arrows) = &view.arrows {
            writeln!(out, r#"  <div class="{}">"#, escape(&arrows.container_classes))?;
            write_button(out, &arrows.previous)?;
            write_button(out, &arrows.next)?;
            writeln!(out, "  </div>")?;
        }

        if let Some(dots) = &view.dots {
            writeln!(out, r#"  <div class="{}">"#, escape(&dots.container_classes))?;
            for dot in &dots.dots {
                writeln!(
                    out,
                    r#"    <button type="button" {} class="{}"></button>"#,
                    action_attributes(dot.action),
                    escape(&dot.classes),
                )?;
            }
            writeln!(out, "  </div>")?;
        }

        writeln!(out, "</div>")
    }
}
