//! Static stylesheet and script served under `/assets`.

pub const STYLESHEET_PATH: &str = "/assets/site.css";
pub const SCRIPT_PATH: &str = "/assets/site.js";

pub const STYLESHEET: &str = r#":root {
  --bg: #fafafa; --panel: #ffffff; --text: #18181b; --muted: #52525b;
  --border: #e4e4e7; --accent: #2563eb;
}
html.dark {
  --bg: #18181b; --panel: #27272a; --text: #fafafa; --muted: #a1a1aa;
  --border: #3f3f46; --accent: #60a5fa;
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text);
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif; line-height: 1.5; }
a { color: var(--accent); text-decoration: none; }
main { max-width: 80rem; margin: 0 auto; padding: 1.5rem 1rem 4rem; }
header.page-header { position: sticky; top: 0; z-index: 30; background: var(--bg);
  border-bottom: 1px solid var(--border); padding: 1rem 0; margin-bottom: 1rem; }
.muted { color: var(--muted); }
.theme-toggle { position: fixed; top: 1rem; right: 1rem; z-index: 50; }
.theme-toggle button, .btn { border: 1px solid var(--border); background: var(--panel);
  color: var(--text); border-radius: .5rem; padding: .4rem .8rem; cursor: pointer; }
.btn-primary { background: var(--accent); color: #fff; border-color: var(--accent); }
.btn-danger { color: #ef4444; }
.btn[disabled] { opacity: .5; cursor: default; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); }
.card { position: relative; background: var(--panel); border-radius: .5rem; padding: 1.5rem;
  box-shadow: 0 1px 2px rgba(0,0,0,.06); overflow: hidden; }
.card + .card { margin-top: 1rem; }
.card-title { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.index { color: var(--muted); margin-right: .5rem; }
.answer { border-top: 1px solid var(--border); margin-top: 1rem; padding-top: 1rem; }
.meta { display: flex; flex-wrap: wrap; gap: .5rem; align-items: center; margin-top: 1.5rem; }
.meta .spacer { margin-left: auto; }
.badge { display: inline-flex; border-radius: 999px; padding: .1rem .6rem; font-size: .75rem;
  font-weight: 500; background: #f4f4f5; color: #27272a; }
.badge-difficulty { background: #dbeafe; color: #1e40af; }
.badge-sky { background: #e0f2fe; color: #075985; }
.badge-blue { background: #dbeafe; color: #1e40af; }
.badge-yellow { background: #fef9c3; color: #854d0e; }
.badge-green { background: #dcfce7; color: #166534; }
.badge-purple { background: #f3e8ff; color: #6b21a8; }
.badge-rose { background: #ffe4e6; color: #9f1239; }
.badge-indigo { background: #e0e7ff; color: #3730a3; }
.badge-gray { background: #f4f4f5; color: #27272a; }
.badge-orange { background: #ffedd5; color: #9a3412; }
html.dark .badge { filter: invert(.9) hue-rotate(180deg); }
.strip { position: absolute; left: 0; right: 0; top: 0; height: .5rem; }
.strip-inline { position: static; display: block; width: 5rem; height: .25rem; margin-top: .5rem; }
.strip-sky { background: #0ea5e9; } .strip-blue { background: #3b82f6; }
.strip-yellow { background: #eab308; } .strip-green { background: #22c55e; }
.strip-purple { background: #a855f7; } .strip-rose { background: #f43f5e; }
.strip-indigo { background: #6366f1; } .strip-gray { background: #71717a; }
.strip-orange { background: #f97316; }
.filters { display: flex; flex-wrap: wrap; gap: .75rem; margin-bottom: 1rem; }
.filters input[type=text], .filters input[type=search] { flex: 1 1 16rem; }
input, select, textarea { font: inherit; color: var(--text); background: var(--panel);
  border: 1px solid var(--border); border-radius: .375rem; padding: .5rem .75rem; }
textarea { width: 100%; }
.pager { display: flex; justify-content: center; align-items: center; gap: .75rem; padding: 1rem 0; }
.empty { text-align: center; color: var(--muted); padding: 3rem 0; }
.code-block { margin: 1rem 0; border: 1px solid var(--border); border-radius: .375rem; overflow: hidden; }
.code-header { display: flex; justify-content: space-between; align-items: center;
  padding: .25rem .75rem; font-size: .75rem; background: var(--border); }
.code-block pre { margin: 0; padding: .75rem; overflow-x: auto; }
.notice { border-radius: .5rem; padding: .75rem 1rem; margin-bottom: 1rem; background: #dcfce7; color: #166534; }
.notice-error { background: #fee2e2; color: #991b1b; }
.admin-bar { position: fixed; bottom: 0; left: 0; right: 0; padding: 1rem; display: flex;
  justify-content: flex-end; gap: 1rem; background: var(--panel); border-top: 1px solid var(--border); }
.toolbar { display: flex; gap: .25rem; margin-bottom: .25rem; }
.field { margin-top: 1rem; }
.field label { display: block; font-size: .875rem; font-weight: 500; margin-bottom: .25rem; }
"#;

pub const SCRIPT: &str = r#"(function () {
  'use strict';

  // Server offsets count Unicode scalar values; the DOM counts UTF-16 units.
  function toChars(s, units) { return Array.from(s.slice(0, units)).length; }
  function toUnits(s, chars) { return Array.from(s).slice(0, chars).join('').length; }

  function copy(text, button) {
    navigator.clipboard.writeText(text).then(function () {
      var label = button.textContent;
      button.textContent = 'Copied!';
      setTimeout(function () { button.textContent = label; }, 2000);
    });
  }

  function post(url, body) {
    return fetch(url, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body)
    }).then(function (res) {
      if (!res.ok) { throw new Error('request failed: ' + res.status); }
      return res.json();
    });
  }

  document.addEventListener('click', function (e) {
    var button = e.target.closest('button');
    if (!button) { return; }

    if (button.classList.contains('copy-code')) {
      var code = button.closest('.code-block').querySelector('pre code');
      copy(code.textContent, button);
    } else if (button.hasAttribute('data-copy')) {
      copy(button.getAttribute('data-copy'), button);
    } else if (button.hasAttribute('data-action')) {
      e.preventDefault();
      var area = document.getElementById(button.getAttribute('data-target'));
      var value = area.value;
      post('/admin/toolbar', {
        action: button.getAttribute('data-action'),
        value: value,
        selection_start: toChars(value, area.selectionStart),
        selection_end: toChars(value, area.selectionEnd)
      }).then(function (edit) {
        area.value = edit.value;
        area.focus();
        area.setSelectionRange(toUnits(edit.value, edit.selection_start),
                               toUnits(edit.value, edit.selection_end));
        area.dispatchEvent(new Event('input', { bubbles: true }));
      });
    }
  });

  document.addEventListener('submit', function (e) {
    var source = e.submitter && e.submitter.hasAttribute('data-confirm') ? e.submitter : e.target;
    var message = source.getAttribute('data-confirm');
    if (message && !window.confirm(message)) { e.preventDefault(); }
  });

  document.addEventListener('input', function (e) {
    var form = e.target.form;
    if (!form || !form.hasAttribute('data-draft')) { return; }
    var save = form.querySelector('[data-save]');
    if (save) { save.disabled = false; }
    var status = form.querySelector('[data-status]');
    if (status) { status.textContent = 'Unsaved changes'; }
  });

  document.addEventListener('paste', function (e) {
    var area = e.target;
    if (!area.hasAttribute || !area.hasAttribute('data-paste')) { return; }
    var html = e.clipboardData.getData('text/html');
    if (!html) { return; }
    e.preventDefault();
    var value = area.value;
    var text = e.clipboardData.getData('text/plain');
    var start = area.selectionStart;
    var end = area.selectionEnd;
    function place(newValue, cursor) {
      area.value = newValue;
      area.focus();
      area.setSelectionRange(cursor, cursor);
      area.dispatchEvent(new Event('input', { bubbles: true }));
    }
    post('/admin/paste', {
      html: html,
      text: text,
      value: value,
      selection_start: toChars(value, start),
      selection_end: toChars(value, end)
    }).then(function (result) {
      place(result.value, toUnits(result.value, result.cursor));
    }).catch(function () {
      place(value.slice(0, start) + text + value.slice(end), start + text.length);
    });
  });
})();
"#;
