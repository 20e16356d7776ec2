//! API reference page.
//!
//! The field table is generated from the same FEATURE_FIELDS contract the
//! pipeline assembles rows from, so the documented order can never drift
//! from the served one.

use axum::{extract::State, response::Html};

use hestia_model::FEATURE_FIELDS;

use crate::state::SharedState;

/// GET /docs — HTML API reference.
pub async fn api_docs(State(_state): State<SharedState>) -> Html<String> {
    Html(render_docs_page())
}

fn render_docs_page() -> String {
    let field_rows: String = FEATURE_FIELDS
        .iter()
        .map(|(name, description)| {
            format!(
                r#"<tr>
                <td class="field-name">{}</td>
                <td>number</td>
                <td>{}</td>
            </tr>"#,
                name, description
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>API Reference — Hestia</title>
    <style>
        body {{
            font-family: 'Inter', Arial, sans-serif;
            background: #f4f6f9;
            margin: 0;
            padding: 2rem;
            color: #333;
        }}
        .page {{
            max-width: 820px;
            margin: 0 auto;
            background: white;
            border-radius: 12px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.1);
            padding: 2rem 2.5rem;
        }}
        h1 {{ color: #007BFF; margin-top: 0; }}
        h2 {{ border-bottom: 1px solid #e3e7ee; padding-bottom: 0.4rem; margin-top: 2rem; }}
        code, pre {{
            background: #f0f2f6;
            border-radius: 6px;
            font-family: 'JetBrains Mono', monospace;
        }}
        code {{ padding: 2px 6px; }}
        pre {{ padding: 1rem; overflow-x: auto; }}
        table {{ width: 100%; border-collapse: collapse; margin: 1rem 0; }}
        th, td {{ text-align: left; padding: 8px 10px; border-bottom: 1px solid #e3e7ee; }}
        th {{ color: #6c757d; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 1px; }}
        .field-name {{ font-weight: 700; }}
        .method {{
            display: inline-block;
            padding: 2px 10px;
            border-radius: 6px;
            color: white;
            font-weight: 700;
            font-size: 0.85rem;
            margin-right: 0.5rem;
        }}
        .get {{ background: #28a745; }}
        .post {{ background: #007BFF; }}
        a {{ color: #007BFF; }}
    </style>
</head>
<body>
    <div class="page">
        <h1>Hestia API Reference</h1>
        <p>Predicts the median house price of a California housing block from
        eight numeric features, using a pre-trained linear regression model
        and feature scaler loaded at startup.</p>

        <h2><span class="method post">POST</span><code>/predict</code></h2>
        <p>Request body: a JSON object with exactly the eight fields below.
        All are required numbers; unknown fields are rejected. Requests that
        violate the schema receive a <code>422</code> before any inference
        runs.</p>

        <table>
            <thead><tr><th>Field</th><th>Type</th><th>Description</th></tr></thead>
            <tbody>{field_rows}</tbody>
        </table>

        <p>Example request:</p>
        <pre>{{
  "MedInc": 8.3252,
  "HouseAge": 41.0,
  "AveRooms": 6.9841,
  "AveBedrms": 1.0238,
  "Population": 322.0,
  "AveOccup": 2.5556,
  "Latitude": 37.88,
  "Longitude": -122.23
}}</pre>

        <p>Successful response (<code>200</code>): the predicted price in
        dollars rounded to 2 decimal places, a status message, and an echo
        of the input fields.</p>
        <pre>{{
  "predicted_price": 452600.0,
  "message": "Prediction successful",
  "input_features": {{ "MedInc": 8.3252, "...": "..." }}
}}</pre>

        <p>Failure response (<code>503</code> when the model artifacts were
        not loaded at startup, <code>500</code> on an inference error):</p>
        <pre>{{
  "error": "Predictor unavailable: model artifacts were not loaded at startup",
  "message": "Prediction failed"
}}</pre>

        <h2><span class="method get">GET</span><code>/</code></h2>
        <p>Interactive prediction form that posts to <code>/predict</code>.</p>

        <h2><span class="method get">GET</span><code>/health</code></h2>
        <p>Readiness probe: <code>{{"status": "ready"}}</code> with
        <code>200</code> when the pipeline is bound,
        <code>{{"status": "degraded"}}</code> with <code>503</code> when
        artifact loading failed at startup.</p>

        <p><a href="/">Back to the prediction form</a></p>
    </div>
</body>
</html>"#
    )
}
