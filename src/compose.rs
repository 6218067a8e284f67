//! Layout composition.
//!
//! [`compose`] turns a prompt plus a theme, font and variant into an inline
//! markup fragment. Composition is pure and total: every combination of
//! catalog entries yields a non-empty fragment, and identical inputs yield
//! byte-identical output.
//!
//! ## Untrusted text
//!
//! The prompt is embedded verbatim, without escaping. Fragments are only safe
//! to render in a context that executes markup when the prompt comes from a
//! trusted source. Callers that cannot guarantee that should pass the prompt
//! through [`escape_markup`] first.

use std::fmt::Write;

use crate::catalog::{Font, Theme, VariantKind};

/// Compose the markup fragment for one layout.
pub fn compose(prompt: &str, theme: &Theme, font: &Font, variant: VariantKind) -> String {
    let mut out = String::with_capacity(1024);
    let _ = writeln!(
        out,
        r#"<section data-variant="{}" data-theme="{}" style="font-family:{};background:{};color:{};border:1px solid {};border-radius:16px;overflow:hidden">"#,
        variant.as_str(),
        theme.name,
        font.family,
        theme.background,
        theme.text,
        theme.border,
    );
    match variant {
        VariantKind::Hero => hero(&mut out, prompt, theme),
        VariantKind::Cards => cards(&mut out, prompt, theme),
        VariantKind::Minimal => minimal(&mut out, prompt, theme),
        VariantKind::Dashboard => dashboard(&mut out, prompt, theme),
        VariantKind::Glass => glass(&mut out, prompt, theme),
        VariantKind::Pricing => pricing(&mut out, prompt, theme),
    }
    out.push_str("</section>");
    out
}

/// Escape the five markup-significant characters.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn button(out: &mut String, label: &str, theme: &Theme) {
    let _ = writeln!(
        out,
        r#"<a style="display:inline-block;background:{};color:{};padding:12px 28px;border-radius:10px;font-weight:600;text-decoration:none">{}</a>"#,
        theme.accent, theme.card_background, label,
    );
}

fn ghost_button(out: &mut String, label: &str, theme: &Theme) {
    let _ = writeln!(
        out,
        r#"<a style="display:inline-block;color:{};border:1px solid {};padding:12px 28px;border-radius:10px;text-decoration:none">{}</a>"#,
        theme.text, theme.border, label,
    );
}

fn card_open(out: &mut String, theme: &Theme) {
    let _ = writeln!(
        out,
        r#"<div style="background:{};border:1px solid {};border-radius:12px;padding:20px">"#,
        theme.card_background, theme.border,
    );
}

fn hero(out: &mut String, prompt: &str, theme: &Theme) {
    let _ = writeln!(
        out,
        r#"<div style="padding:64px 40px;text-align:center;border-bottom:4px solid {}">"#,
        theme.accent,
    );
    let _ = writeln!(
        out,
        r#"<h1 style="font-size:44px;font-weight:800;margin:0 0 16px">{prompt}</h1>"#
    );
    out.push_str(
        r#"<p style="font-size:18px;opacity:.8;margin:0 0 32px">Launch faster with a page built around what matters.</p>"#,
    );
    out.push('\n');
    out.push_str(r#"<div style="display:flex;gap:12px;justify-content:center">"#);
    out.push('\n');
    button(out, "Get started", theme);
    ghost_button(out, "Learn more", theme);
    out.push_str("</div>\n");
    card_open(out, theme);
    out.push_str(r#"<p style="margin:0">Trusted by teams who ship every day.</p>"#);
    out.push_str("\n</div>\n</div>\n");
}

fn cards(out: &mut String, prompt: &str, theme: &Theme) {
    out.push_str(r#"<div style="padding:48px 32px">"#);
    out.push('\n');
    let _ = writeln!(
        out,
        r#"<h2 style="font-size:32px;margin:0 0 24px;text-align:center">{prompt}</h2>"#
    );
    out.push_str(r#"<div style="display:grid;grid-template-columns:repeat(3,1fr);gap:16px">"#);
    out.push('\n');
    for (title, body) in [
        ("Fast", "Set up in minutes, not days."),
        ("Reliable", "Built to stay up when it counts."),
        ("Flexible", "Adapts as your needs change."),
    ] {
        card_open(out, theme);
        let _ = writeln!(
            out,
            r#"<div style="width:36px;height:36px;border-radius:8px;background:{};margin-bottom:12px"></div>"#,
            theme.accent,
        );
        let _ = writeln!(out, r#"<h3 style="margin:0 0 8px">{title}</h3>"#);
        let _ = writeln!(out, r#"<p style="margin:0;opacity:.75">{body}</p>"#);
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");
}

fn minimal(out: &mut String, prompt: &str, theme: &Theme) {
    out.push_str(r#"<div style="padding:96px 40px;text-align:center">"#);
    out.push('\n');
    let _ = writeln!(
        out,
        r#"<h1 style="font-size:36px;font-weight:400;letter-spacing:-0.5px;margin:0 0 24px">{prompt}</h1>"#
    );
    let _ = writeln!(
        out,
        r#"<hr style="width:48px;border:0;border-top:2px solid {};margin:0 auto 24px">"#,
        theme.border,
    );
    card_open(out, theme);
    button(out, "Join the waitlist", theme);
    out.push_str("</div>\n</div>\n");
}

fn dashboard(out: &mut String, prompt: &str, theme: &Theme) {
    let _ = writeln!(
        out,
        r#"<header style="display:flex;justify-content:space-between;align-items:center;padding:16px 24px;border-bottom:1px solid {}">"#,
        theme.border,
    );
    let _ = writeln!(out, r#"<strong style="font-size:20px">{prompt}</strong>"#);
    button(out, "New report", theme);
    out.push_str("</header>\n");
    out.push_str(
        r#"<div style="display:grid;grid-template-columns:repeat(4,1fr);gap:12px;padding:24px">"#,
    );
    out.push('\n');
    for (label, value) in [
        ("Users", "12.4k"),
        ("Revenue", "$48.2k"),
        ("Conversion", "3.8%"),
        ("Churn", "1.2%"),
    ] {
        card_open(out, theme);
        let _ = writeln!(
            out,
            r#"<p style="margin:0;font-size:13px;opacity:.7">{label}</p>"#
        );
        let _ = writeln!(
            out,
            r#"<p style="margin:4px 0 0;font-size:24px;font-weight:700;color:{}">{value}</p>"#,
            theme.accent,
        );
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out.push_str(r#"<div style="padding:0 24px 24px">"#);
    out.push('\n');
    card_open(out, theme);
    out.push_str(r#"<h3 style="margin:0 0 12px">Recent activity</h3>"#);
    out.push('\n');
    for row in ["Report exported", "New team member", "Billing updated"] {
        let _ = writeln!(
            out,
            r#"<div style="padding:8px 0;border-top:1px solid {}">{row}</div>"#,
            theme.border,
        );
    }
    out.push_str("</div>\n</div>\n");
}

fn glass(out: &mut String, prompt: &str, theme: &Theme) {
    let _ = writeln!(
        out,
        r#"<div style="padding:72px 40px;background:linear-gradient(135deg,{} 0%,{} 100%)">"#,
        theme.accent, theme.background,
    );
    let _ = writeln!(
        out,
        r#"<div style="max-width:520px;margin:0 auto;padding:40px;border-radius:20px;background:{};opacity:.92;border:1px solid {};backdrop-filter:blur(12px)">"#,
        theme.card_background, theme.border,
    );
    let _ = writeln!(
        out,
        r#"<h1 style="font-size:34px;margin:0 0 12px">{prompt}</h1>"#
    );
    out.push_str(
        r#"<p style="margin:0 0 24px;opacity:.8">A clear view of everything you need, nothing you don't.</p>"#,
    );
    out.push('\n');
    button(out, "Try it free", theme);
    out.push_str("</div>\n</div>\n");
}

fn pricing(out: &mut String, prompt: &str, theme: &Theme) {
    out.push_str(r#"<div style="padding:48px 32px;text-align:center">"#);
    out.push('\n');
    let _ = writeln!(
        out,
        r#"<h2 style="font-size:32px;margin:0 0 8px">{prompt}</h2>"#
    );
    out.push_str(r#"<p style="margin:0 0 32px;opacity:.75">Simple plans that grow with you.</p>"#);
    out.push('\n');
    out.push_str(r#"<div style="display:grid;grid-template-columns:repeat(3,1fr);gap:16px">"#);
    out.push('\n');
    for (tier, price, featured) in [
        ("Starter", "$0", false),
        ("Pro", "$29", true),
        ("Team", "$99", false),
    ] {
        let edge = if featured { theme.accent } else { theme.border };
        let _ = writeln!(
            out,
            r#"<div style="background:{};border:2px solid {};border-radius:12px;padding:24px">"#,
            theme.card_background, edge,
        );
        let _ = writeln!(out, r#"<h3 style="margin:0 0 8px">{tier}</h3>"#);
        let _ = writeln!(
            out,
            r#"<p style="font-size:32px;font-weight:800;margin:0 0 16px">{price}<span style="font-size:14px;opacity:.6">/mo</span></p>"#
        );
        if featured {
            button(out, "Choose Pro", theme);
        } else {
            ghost_button(out, "Choose", theme);
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");
}
