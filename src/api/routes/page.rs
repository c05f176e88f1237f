//! Page Route
//!
//! - GET / - The single-page dashboard shell
//!
//! The shell is generic: it fetches the layout JSON, builds the controls
//! from it, and re-fetches exactly the chart slots that subscribe to a
//! changed input. Rendering is delegated to Plotly.js.

use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Launch Records Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
    <style>
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background: #f5f5f5;
        }
        h1 { text-align: center; color: #503d36; margin-bottom: 20px; }
        .controls {
            background: white;
            padding: 15px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        label { font-weight: 600; display: block; margin-bottom: 5px; color: #555; }
        select {
            width: 100%;
            padding: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
            font-size: 14px;
        }
        .range-row { display: flex; gap: 10px; align-items: center; margin-top: 15px; }
        .range-row input[type="range"] { flex: 1; }
        .range-value { min-width: 60px; text-align: right; font-variant-numeric: tabular-nums; }
        .chart {
            background: white;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            margin-bottom: 20px;
            min-height: 400px;
        }
        .status { color: #666; font-size: 14px; margin-top: 8px; }
    </style>
</head>
<body>
    <h1 id="title"></h1>
    <div class="controls">
        <label for="site"></label>
        <select id="site"></select>
        <label id="rangeLabel" style="margin-top: 15px;"></label>
        <div class="range-row">
            <span class="range-value" id="lowValue"></span>
            <input type="range" id="low">
            <input type="range" id="high">
            <span class="range-value" id="highValue"></span>
        </div>
        <div class="status" id="status">Loading layout...</div>
    </div>
    <div id="charts"></div>

    <script>
        let layout = null;
        const controls = {};

        async function init() {
            const resp = await fetch('/api/v1/layout');
            layout = await resp.json();

            document.title = layout.title;
            document.getElementById('title').textContent = layout.title;

            const select = document.getElementById('site');
            document.querySelector('label[for="site"]').textContent =
                layout.dropdown.placeholder;
            for (const opt of layout.dropdown.options) {
                const option = document.createElement('option');
                option.value = opt.value;
                option.textContent = opt.label;
                select.appendChild(option);
            }
            controls[layout.dropdown.id] = () => select.value;
            select.addEventListener('change', () => changed(layout.dropdown.id));

            const slider = layout.slider;
            document.getElementById('rangeLabel').textContent = slider.label;
            const low = document.getElementById('low');
            const high = document.getElementById('high');
            for (const input of [low, high]) {
                input.min = slider.min;
                input.max = slider.max;
                input.step = slider.step;
            }
            low.value = slider.value[0];
            high.value = slider.value[1];
            controls[slider.id] = () => [Number(low.value), Number(high.value)];
            const onSlide = () => { showRange(); changed(slider.id); };
            low.addEventListener('change', onSlide);
            high.addEventListener('change', onSlide);
            showRange();

            const charts = document.getElementById('charts');
            for (const slot of layout.charts) {
                const div = document.createElement('div');
                div.id = slot.id;
                div.className = 'chart';
                charts.appendChild(div);
            }

            document.getElementById('status').textContent = '';
            for (const slot of layout.charts) refresh(slot);
        }

        function showRange() {
            const [lo, hi] = controls[layout.slider.id]();
            document.getElementById('lowValue').textContent = lo;
            document.getElementById('highValue').textContent = hi;
        }

        function changed(inputId) {
            for (const slot of layout.charts) {
                if (slot.inputs.includes(inputId)) refresh(slot);
            }
        }

        async function refresh(slot) {
            const site = controls[layout.dropdown.id]();
            const [low, high] = controls[layout.slider.id]();
            const params = new URLSearchParams({ site, low, high });
            const resp = await fetch(`/api/v1/callback/${slot.id}?` + params);
            if (!resp.ok) {
                document.getElementById('status').textContent =
                    `Failed to refresh ${slot.id} (${resp.status})`;
                return;
            }
            const fig = await resp.json();
            Plotly.react(slot.id, fig.data, fig.layout, { responsive: true });
        }

        init();
    </script>
</body>
</html>
"##;
