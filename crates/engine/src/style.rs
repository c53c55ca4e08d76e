pub const STYLE: &str = r#"
:root {
  --main-font: "Source Sans 3", -apple-system, system-ui, sans-serif;
  --mono-font: "Fira Code", ui-monospace, monospace;
  --gap: 1.25rem;
  --bg: #f8fafb;
  --fg: #121210;
  --accent: #e2e8f0;
  --accent-dark: #cad2da;
  --error: #962020;
  --border: 1.5px solid var(--fg);
}

*, *::before, *::after { box-sizing: border-box; }

html, body {
  margin: 0;
  height: 100%;
  font-family: var(--main-font);
  color: var(--fg);
  background: var(--bg);
}

.root-container { display: flex; flex-direction: column; height: 100vh; }

header { border-bottom: var(--border); }
header > h1 { margin: 0; padding: var(--gap); text-transform: uppercase; }

.sidebar-layout { display: flex; flex: 1; min-height: 0; }
.sidebar { border-right: var(--border); overflow: auto; }
.not-sidebar { flex: 1; display: flex; flex-direction: column; overflow: auto; }

.tables-list { display: flex; flex-direction: column; padding: 0.5rem 1rem 0.5rem 0.5rem; }
.tables-list-item {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  height: 2rem;
  padding: 0 0.75rem;
  border-radius: 0.375rem;
  white-space: nowrap;
  cursor: pointer;
}
.tables-list-item:hover { background: var(--accent); }
.schema-error { color: var(--error); padding: 0.75rem; }

.top-container { display: flex; flex-direction: column; margin: 0; border-bottom: var(--border); }
.editor {
  min-height: 12rem;
  padding: 0.75rem;
  border: none;
  border-bottom: var(--border);
  resize: vertical;
  font-family: var(--mono-font);
  font-size: 0.95rem;
  background: var(--bg);
}

.button-container { display: flex; align-items: center; gap: 0.75rem; padding: 8px; }
.button-container button {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  font: inherit;
  background: var(--bg);
  border: 1px solid var(--fg);
  border-radius: 0.2rem;
  cursor: pointer;
}
.button-container button:hover { background: var(--accent); }
.button-container button:active { background: var(--accent-dark); }

.htmx-indicator { display: none; }
.htmx-request .htmx-indicator, .htmx-request.htmx-indicator { display: inline; }

.bottom-container { padding: 14px; overflow: auto; }
.result-meta { margin: 0 0 0.5rem; font-size: 0.9rem; opacity: 0.7; }
.query-error { color: var(--error); }

table { border-collapse: collapse; }
thead { position: sticky; top: 0; background: var(--bg); text-align: left; }
tbody { border-block: 1px solid var(--fg); }
td, th { padding-right: 1rem; white-space: pre; }
.empty-row { color: transparent; }
"#;
