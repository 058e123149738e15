use axum::response::Html;

/// GET /
/// Serves the upload form. Score and missing terms render client-side from
/// the JSON returned by the comparisons endpoint.
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Résumé adherence</title>
<style>
  body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
  label { display: block; margin: 1rem 0; }
  textarea, input[type=file] { display: block; width: 100%; margin-top: 0.25rem; }
  button { padding: 0.5rem 1.5rem; }
  section { margin-top: 2rem; border-top: 1px solid gray; padding-top: 1rem; }
</style>
</head>
<body>
<h1>Résumé adherence</h1>
<p>Upload a résumé (PDF) and paste a job description to see how closely they match.</p>
<form id="compare-form">
  <label>Résumé (PDF)
    <input type="file" name="resume" accept=".pdf" required>
  </label>
  <label>Job description
    <textarea name="job_description" rows="8" required></textarea>
  </label>
  <button type="submit">Compare</button>
</form>
<section id="result" hidden>
  <p>Adherence: <strong id="adherence"></strong>%</p>
  <p>Terms from the job description missing from the résumé:</p>
  <ul id="missing"></ul>
  <p id="no-missing" hidden>None — every term is covered.</p>
</section>
<script>
const form = document.getElementById('compare-form');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const response = await fetch('/api/v1/comparisons', {
    method: 'POST',
    body: new FormData(form),
  });
  const body = await response.json();
  if (!response.ok) {
    alert(body.error ? body.error.message : 'Comparison failed');
    return;
  }
  document.getElementById('adherence').textContent = body.adherence_percentage.toFixed(2);
  const list = document.getElementById('missing');
  list.replaceChildren(...body.missing_terms.map((term) => {
    const item = document.createElement('li');
    item.textContent = term;
    return item;
  }));
  document.getElementById('no-missing').hidden = body.missing_terms.length > 0;
  document.getElementById('result').hidden = false;
});
</script>
</body>
</html>
"#;
