pub const CSS_STYLES: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  background-color: #0d1117;
  color: #c9d1d9;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
    "Helvetica Neue", Arial, sans-serif;
}

.container {
  width: 100%;
  min-height: 100vh;
  padding: 25px;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.card {
  border: 1px solid #30363d;
  border-radius: 5px;
}

.header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  background-color: #161b22;
  padding: 10px;
  border-bottom: 1px solid #30363d;
}

.changes {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 12px;
  font-size: 14px;
}

.add {
  color: #28a745;
}

.remove {
  color: #d73a49;
}

.body {
  font-size: 14px;
  line-height: 1.5;
}

.line {
  display: flex;
  align-items: center;
  padding: 2px 10px;
}

.line_number {
  width: 40px;
  text-align: right;
  color: #6a737d;
}

.line_content {
  flex: 1;
  padding-left: 10px;
}

.added {
  background-color: rgba(50, 207, 94, 0.271);
  color: white;
}

.removed {
  background-color: rgba(209, 72, 88, 0.298);
  color: white;
}

.word-change {
  border-radius: 2px;
}

.added .word-change {
  background-color: rgba(46, 160, 67, 0.6);
}

.removed .word-change {
  background-color: rgba(248, 81, 73, 0.6);
}

.file_name {
  font-size: 14px;
}

.diff_header {
  background-color: rgba(35, 63, 92, 0.5);
  color: #979ea7;
  padding: 2px 10px;
  font-family: ui-monospace, SFMono-Regular, "SF Mono", Menlo, Consolas,
    "Liberation Mono", monospace;
  font-size: 12px;
}

.large-content {
  display: none;
}

.show-content-btn {
  background: rgba(110, 118, 129, 0.4);
  border: none;
  color: #8b949e;
  padding: 4px 8px;
  border-radius: 4px;
  cursor: pointer;
  font-size: 12px;
  margin: 4px 0;
}

.show-content-btn:hover {
  background: rgba(110, 118, 129, 0.5);
  color: #c9d1d9;
}"#;

pub const TOGGLE_SCRIPT: &str = r#"function toggleContent(id) {
  const content = document.getElementById(id);
  const btn = document.getElementById(id + '-btn');
  if (content.style.display === 'none') {
    content.style.display = 'block';
    btn.style.display = 'none';
  }
}"#;

/// Handlebars template for the whole page. `{{{styles}}}` and `{{{script}}}`
/// are the only unescaped insertions and always receive the constants above.
/// Segment spans are kept on one line so no whitespace lands between them.
pub const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{title}}</title>
    <style>{{{styles}}}</style>
    <script>{{{script}}}</script>
  </head>
  <body>
    <div class="container">
      {{#each diffs}}
      <div class="card">
        <div class="header">
          <p class="file_name">{{file_name}}</p>
          <div class="changes">
            <p class="add">+{{added_count}}</p>
            <p class="remove">-{{removed_count}}</p>
          </div>
        </div>
        {{#each hunks}}
        <div class="body">
          <div class="diff_header">{{header}}</div>
          {{#each lines}}
          <div class="line{{#if class}} {{class}}{{/if}}">
            <div class="line_number">{{line_number}}</div>
            <div class="line_content">
              {{#if is_large}}
                <span id="{{id}}" class="large-content" style="display: none;">{{content}}</span>
                <button id="{{id}}-btn" class="show-content-btn" onclick="toggleContent('{{id}}')">
                  Large diff hidden. Click to show {{char_count}} characters...
                </button>
              {{else}}
                {{#if segments}}
                  {{#each segments}}{{#if changed}}<span class="word-change">{{text}}</span>{{else}}{{text}}{{/if}}{{/each}}
                {{else}}
                  {{content}}
                {{/if}}
              {{/if}}
            </div>
          </div>
          {{/each}}
        </div>
        {{/each}}
      </div>
      {{/each}}
    </div>
  </body>
</html>"#;
