//! Embedded stylesheet for the playbook page.
//!
//! The page ships as a single self-contained document, so the stylesheet is
//! inlined into `<head>`. Class names are semantic; the dark palette follows
//! the source material.

/// The full stylesheet, inlined verbatim into the document head.
pub const STYLESHEET: &str = "\
:root {
  color-scheme: dark;
  --bg: #020617;
  --panel: #0f172a;
  --card: #020617cc;
  --border: #1e293b;
  --text: #f1f5f9;
  --text-muted: #cbd5e1;
  --text-dim: #94a3b8;
  --accent: #38bdf8;
  --accent-soft: #7dd3fc;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font: 16px/1.6 system-ui, -apple-system, 'Segoe UI', sans-serif;
}
a { color: var(--accent-soft); }
.hero {
  max-width: 56rem;
  margin: 0 auto;
  padding: 5rem 1.5rem 6rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  background: radial-gradient(circle at top, #38bdf859, #0f172a00);
}
.hero .eyebrow {
  margin: 0;
  font-size: 0.875rem;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--accent-soft);
}
.hero h1 { margin: 0; font-size: 2.75rem; line-height: 1.1; font-weight: 600; }
.hero .lede { margin: 0; max-width: 42rem; font-size: 1.125rem; color: var(--text-muted); }
.hero .actions { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.hero .actions a {
  border-radius: 0.375rem;
  padding: 0.5rem 1.25rem;
  font-size: 0.875rem;
  font-weight: 600;
  text-decoration: none;
}
.hero .actions a.primary { background: var(--accent); color: var(--bg); }
.hero .actions a.secondary { border: 1px solid var(--border); color: var(--text); }
main {
  max-width: 64rem;
  margin: 0 auto;
  padding: 0 1.5rem 6rem;
  display: flex;
  flex-direction: column;
  gap: 4rem;
}
main section {
  border: 1px solid var(--border);
  border-radius: 1rem;
  background: #0f172a99;
  padding: 2rem;
  display: grid;
  gap: 1.5rem;
}
main h2 { margin: 0; font-size: 1.75rem; color: var(--accent-soft); }
.section-intro { margin: 0.5rem 0 0; color: var(--text-muted); }
.step {
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  background: var(--card);
  padding: 1.5rem;
}
.step h3 { margin: 0; font-size: 1.125rem; color: var(--accent-soft); }
.step .summary { margin: 0.5rem 0 0; font-size: 0.875rem; }
.step ul { margin: 1rem 0 0; padding-left: 1.25rem; font-size: 0.875rem; color: var(--text-dim); }
.step li + li { margin-top: 0.5rem; }
.code-sample {
  margin-top: 1.25rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  overflow: hidden;
  background: var(--bg);
}
.code-sample header {
  display: flex;
  justify-content: space-between;
  border-bottom: 1px solid var(--border);
  background: var(--panel);
  padding: 0.5rem 1rem;
  font-size: 0.75rem;
  font-weight: 500;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--text-dim);
}
.code-sample pre { margin: 0; padding: 1rem; overflow-x: auto; font-size: 0.75rem; }
.tips { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
.tip { border: 1px solid var(--border); border-radius: 0.75rem; background: var(--card); padding: 1.25rem; }
.tip h3 {
  margin: 0;
  font-size: 0.875rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--accent-soft);
}
.tip ul { margin: 0.75rem 0 0; padding-left: 1rem; font-size: 0.875rem; color: var(--text-dim); }
.tip li + li { margin-top: 0.5rem; }
.checklist { margin: 0; padding: 0; list-style: none; display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.checklist li {
  display: flex;
  gap: 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: var(--card);
  padding: 1rem;
  font-size: 0.875rem;
}
.checklist .mark { color: var(--accent-soft); }
.resources { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.resource {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  background: var(--card);
  padding: 1.25rem;
  text-decoration: none;
}
.resource .name {
  font-size: 0.875rem;
  font-weight: 600;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--accent-soft);
}
.resource p { margin: 0; font-size: 0.875rem; color: var(--text-dim); }
footer { background: #020617cc; }
footer .inner {
  max-width: 64rem;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: space-between;
  font-size: 0.875rem;
  color: var(--text-dim);
}
footer p { margin: 0; }
";
