use crate::models::Stats;

pub fn render_index(stats: &Stats) -> String {
    INDEX_HTML
        .replace("{{COMPLETED_TODAY}}", &stats.completed_today.to_string())
        .replace("{{CURRENT_STREAK}}", &stats.current_streak.to_string())
        .replace("{{LONGEST_STREAK}}", &stats.longest_streak.to_string())
        .replace("{{MONTHLY_PROGRESS}}", &stats.monthly_progress.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HabitQuest</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg: #0d1117;
      --panel: #161b22;
      --border: #30363d;
      --ink: #e6edf3;
      --muted: #8b949e;
      --accent: #39d353;
      --accent-2: #ff6b4a;
      --danger: #f85149;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: 'Space Grotesk', 'Trebuchet MS', sans-serif;
      display: flex;
      justify-content: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    header .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    section.panel {
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 20px;
      display: grid;
      gap: 14px;
    }

    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 14px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .section-note {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .calendar-scroll {
      overflow-x: auto;
      padding-bottom: 6px;
    }

    .months-row {
      position: relative;
      height: 16px;
      margin-left: 34px;
      font-size: 11px;
      color: var(--muted);
    }

    .months-row span {
      position: absolute;
      top: 0;
    }

    .calendar-body {
      display: flex;
      gap: 4px;
    }

    .day-labels {
      display: grid;
      grid-template-rows: repeat(7, 12px);
      gap: 3px;
      width: 30px;
      font-size: 10px;
      color: var(--muted);
    }

    .weeks {
      display: flex;
      gap: 3px;
    }

    .week {
      display: grid;
      grid-template-rows: repeat(7, 12px);
      gap: 3px;
    }

    .cell {
      width: 12px;
      height: 12px;
      border-radius: 3px;
      background: var(--panel);
    }

    .cell.blank {
      background: transparent;
    }

    .legend {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 0.8rem;
      color: var(--muted);
      flex-wrap: wrap;
    }

    .legend .cell {
      display: inline-block;
      vertical-align: middle;
    }

    .cards-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
      gap: 12px;
    }

    .month-card {
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 14px;
      cursor: pointer;
      display: grid;
      gap: 4px;
      position: relative;
    }

    .month-card:hover {
      border-color: var(--accent);
    }

    .month-card h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    .month-card .meta {
      color: var(--muted);
      font-size: 0.8rem;
    }

    .month-card .remove {
      position: absolute;
      top: 8px;
      right: 8px;
      background: transparent;
      border: none;
      color: var(--muted);
      font-size: 1rem;
      cursor: pointer;
      padding: 2px 6px;
    }

    .month-card .remove:hover {
      color: var(--danger);
    }

    form.inline {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      align-items: center;
    }

    input, select, textarea, button {
      font: inherit;
    }

    input, select, textarea {
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 8px;
      color: var(--ink);
      padding: 8px 10px;
    }

    textarea {
      width: 100%;
      resize: vertical;
    }

    button {
      background: var(--accent);
      border: none;
      border-radius: 8px;
      color: #04260d;
      font-weight: 600;
      padding: 8px 16px;
      cursor: pointer;
    }

    button.secondary {
      background: var(--panel);
      border: 1px solid var(--border);
      color: var(--ink);
    }

    button:disabled {
      opacity: 0.5;
      cursor: wait;
    }

    .activities {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .activity-chip {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.85rem;
    }

    .activity-chip .dot {
      width: 10px;
      height: 10px;
      border-radius: 50%;
    }

    .activity-chip button {
      background: transparent;
      border: none;
      color: var(--muted);
      padding: 0 2px;
      font-weight: 400;
    }

    .activity-chip button:hover {
      color: var(--danger);
    }

    .grid-scroll {
      overflow-x: auto;
    }

    table.day-grid {
      border-collapse: collapse;
      font-size: 0.75rem;
    }

    table.day-grid th, table.day-grid td {
      border: 1px solid var(--border);
      min-width: 24px;
      height: 24px;
      text-align: center;
      padding: 0 4px;
    }

    table.day-grid th.name, table.day-grid td.name {
      text-align: left;
      min-width: 110px;
      white-space: nowrap;
    }

    table.day-grid td.toggle {
      cursor: pointer;
    }

    .field-errors {
      margin: 0;
      padding-left: 18px;
      color: var(--danger);
      font-size: 0.85rem;
    }

    .banner {
      display: none;
      background: rgba(248, 81, 73, 0.12);
      border: 1px solid var(--danger);
      border-radius: 10px;
      padding: 10px 14px;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .banner.visible {
      display: flex;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type='error'] {
      color: var(--danger);
    }

    .status[data-type='ok'] {
      color: var(--accent);
    }

    .hidden {
      display: none !important;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>HabitQuest</h1>
      <p class="subtitle">Month cards, daily activities and a year of progress at a glance.</p>
    </header>

    <div class="banner" id="banner">
      <span id="banner-text"></span>
      <button class="secondary" id="banner-retry" type="button">Retry</button>
    </div>

    <section class="panel">
      <h2>Today</h2>
      <div class="stats-grid">
        <div class="stat">
          <span class="label">Completed today</span>
          <span class="value" id="stat-completed">{{COMPLETED_TODAY}}</span>
        </div>
        <div class="stat">
          <span class="label">Current streak</span>
          <span class="value" id="stat-current">{{CURRENT_STREAK}}</span>
        </div>
        <div class="stat">
          <span class="label">Best streak</span>
          <span class="value" id="stat-longest">{{LONGEST_STREAK}}</span>
        </div>
        <div class="stat">
          <span class="label">Monthly progress</span>
          <span class="value" id="stat-monthly">{{MONTHLY_PROGRESS}}%</span>
        </div>
      </div>
    </section>

    <section class="panel">
      <h2>Habit progress</h2>
      <div class="calendar-scroll">
        <div class="months-row" id="months-row"></div>
        <div class="calendar-body">
          <div class="day-labels">
            <span></span><span>Mon</span><span></span><span>Wed</span><span></span><span>Fri</span><span></span>
          </div>
          <div class="weeks" id="weeks"></div>
        </div>
      </div>
      <div class="legend" id="legend">
        <span>Less</span>
      </div>
      <p class="section-note" id="calendar-footer"></p>
    </section>

    <section class="panel">
      <h2>Month cards</h2>
      <form class="inline" id="card-form">
        <select id="card-month"></select>
        <input id="card-year" type="number" min="1970" max="2100" />
        <button id="card-add" type="submit">Add card</button>
      </form>
      <ul class="field-errors hidden" id="card-errors"></ul>
      <div class="cards-grid" id="cards"></div>
    </section>

    <section class="panel hidden" id="detail">
      <form class="inline">
        <button class="secondary" id="detail-back" type="button">Back</button>
      </form>
      <h2 id="detail-title"></h2>

      <div>
        <h2>Monthly phrase</h2>
        <textarea id="phrase" rows="2" placeholder="A phrase or goal for this month..."></textarea>
        <form class="inline" id="phrase-form">
          <button id="phrase-save" type="submit">Save phrase</button>
        </form>
      </div>

      <div>
        <h2>Activities</h2>
        <div class="activities" id="activities"></div>
        <form class="inline" id="activity-form">
          <input id="activity-name" maxlength="20" placeholder="New activity (max 20 chars)" />
          <button id="activity-add" type="submit">Add activity</button>
        </form>
        <ul class="field-errors hidden" id="activity-errors"></ul>
      </div>

      <div class="grid-scroll">
        <table class="day-grid" id="day-grid"></table>
      </div>

      <div>
        <h2>Daily achievements</h2>
        <form class="inline" id="achievement-form">
          <input id="achievement-day" type="number" min="1" max="31" placeholder="Day" style="width: 80px" />
          <input id="achievement-text" placeholder="What did you achieve?" />
          <button id="achievement-save" type="submit">Save</button>
        </form>
        <ul class="section-note" id="achievements"></ul>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TIER_COLORS = ['#161b22', '#216e39', '#0e7a3a', '#26a641', '#39d353'];
    const MONTH_NAMES = ['Enero', 'Febrero', 'Marzo', 'Abril', 'Mayo', 'Junio',
      'Julio', 'Agosto', 'Septiembre', 'Octubre', 'Noviembre', 'Diciembre'];

    const el = (id) => document.getElementById(id);
    const statusEl = el('status');

    let currentCardId = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (type === 'ok') {
        setTimeout(() => { statusEl.textContent = ''; }, 1500);
      }
    };

    const showBanner = (message, retry) => {
      el('banner-text').textContent = message;
      el('banner').classList.add('visible');
      el('banner-retry').onclick = () => {
        el('banner').classList.remove('visible');
        retry();
      };
    };

    const api = async (path, body) => {
      let res;
      try {
        res = await fetch(path, body === undefined ? undefined : {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(body)
        });
      } catch (_) {
        throw new Error('Connection error. Check your network.');
      }
      let payload = null;
      try { payload = await res.json(); } catch (_) {}
      if (!payload) {
        throw new Error('Connection error. Check your network.');
      }
      if (!payload.success) {
        const err = new Error(payload.message || 'Request failed');
        err.fields = payload.errors || null;
        throw err;
      }
      return payload.data;
    };

    // One in-flight request per control: the trigger stays disabled until
    // the call settles.
    const busy = async (button, work) => {
      button.disabled = true;
      try {
        await work();
      } finally {
        button.disabled = false;
      }
    };

    const showFieldErrors = (listEl, err) => {
      listEl.innerHTML = '';
      if (err.fields) {
        Object.values(err.fields).flat().forEach((message) => {
          const item = document.createElement('li');
          item.textContent = message;
          listEl.appendChild(item);
        });
        listEl.classList.remove('hidden');
      } else {
        listEl.classList.add('hidden');
        setStatus(err.message, 'error');
      }
    };

    const loadStats = async () => {
      const stats = await api('/api/stats');
      el('stat-completed').textContent = stats.completed_today;
      el('stat-current').textContent = stats.current_streak;
      el('stat-longest').textContent = stats.longest_streak;
      el('stat-monthly').textContent = stats.monthly_progress + '%';
    };

    const loadCalendar = async () => {
      const grid = await api('/api/calendar');
      const months = el('months-row');
      const weeks = el('weeks');
      months.innerHTML = '';
      weeks.innerHTML = '';

      if (!grid.weeks) {
        el('calendar-footer').textContent = 'No data yet. Add a month card to start tracking.';
        return;
      }

      grid.month_labels.forEach((label) => {
        const span = document.createElement('span');
        span.textContent = label.label;
        span.style.left = (label.week * 15) + 'px';
        months.appendChild(span);
      });

      let activeDays = 0;
      let totalDays = 0;
      for (let week = 0; week < grid.weeks; week += 1) {
        const column = document.createElement('div');
        column.className = 'week';
        for (let row = 0; row < 7; row += 1) {
          const cell = document.createElement('div');
          const data = grid.rows[row][week];
          if (data) {
            totalDays += 1;
            if (data.completed_count > 0) activeDays += 1;
            cell.className = 'cell';
            cell.style.background = TIER_COLORS[data.tier];
            cell.title = data.completed_count > 0
              ? data.date + ' - ' + data.completed_count + ' completed'
              : data.date + ' - no activity';
          } else {
            cell.className = 'cell blank';
          }
          column.appendChild(cell);
        }
        weeks.appendChild(column);
      }
      el('calendar-footer').textContent = activeDays + ' of ' + totalDays + ' days with activity';
    };

    const renderLegend = () => {
      const legend = el('legend');
      TIER_COLORS.forEach((color) => {
        const swatch = document.createElement('span');
        swatch.className = 'cell';
        swatch.style.background = color;
        legend.appendChild(swatch);
      });
      const more = document.createElement('span');
      more.textContent = 'More';
      legend.appendChild(more);
    };

    const loadCards = async () => {
      let cards;
      try {
        cards = await api('/api/cards');
      } catch (err) {
        showBanner(err.message, loadCards);
        return;
      }
      const container = el('cards');
      container.innerHTML = '';
      cards.forEach((card) => {
        const node = document.createElement('div');
        node.className = 'month-card';
        const title = document.createElement('h3');
        title.textContent = card.month + ' ' + card.year;
        const meta = document.createElement('span');
        meta.className = 'meta';
        meta.textContent = 'added ' + card.created_at.slice(0, 10);
        const remove = document.createElement('button');
        remove.className = 'remove';
        remove.type = 'button';
        remove.textContent = 'x';
        remove.title = 'Delete card';
        remove.onclick = (event) => {
          event.stopPropagation();
          if (!confirm('Delete ' + card.month + ' ' + card.year + ' and all its data?')) return;
          busy(remove, async () => {
            try {
              await api('/api/cards/delete', { card_id: card.id });
              if (currentCardId === card.id) closeDetail();
              setStatus('Card deleted', 'ok');
              await Promise.all([loadCards(), loadCalendar(), loadStats()]);
            } catch (err) {
              setStatus(err.message, 'error');
            }
          });
        };
        node.onclick = () => openCard(card.id);
        node.appendChild(remove);
        node.appendChild(title);
        node.appendChild(meta);
        container.appendChild(node);
      });
    };

    const openCard = async (cardId) => {
      try {
        const detail = await api('/api/cards/detail', { card_id: cardId });
        currentCardId = cardId;
        renderDetail(detail);
        el('detail').classList.remove('hidden');
        el('detail').scrollIntoView({ behavior: 'smooth' });
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const closeDetail = () => {
      currentCardId = null;
      el('detail').classList.add('hidden');
    };

    const refreshDetail = async () => {
      if (currentCardId === null) return;
      const detail = await api('/api/cards/detail', { card_id: currentCardId });
      renderDetail(detail);
    };

    const renderDetail = (detail) => {
      el('detail-title').textContent = detail.card.month + ' ' + detail.card.year;
      el('phrase').value = detail.phrase;
      el('achievement-day').max = detail.days_in_month;

      const chips = el('activities');
      chips.innerHTML = '';
      detail.activities.forEach((activity) => {
        const chip = document.createElement('span');
        chip.className = 'activity-chip';
        const dot = document.createElement('span');
        dot.className = 'dot';
        dot.style.background = activity.color;
        const name = document.createElement('span');
        name.textContent = activity.name;
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.textContent = 'x';
        remove.title = 'Delete activity';
        remove.onclick = () => {
          if (!confirm('Delete "' + activity.name + '" and its tracked days?')) return;
          busy(remove, async () => {
            try {
              await api('/api/activities/delete', { activity_id: activity.id });
              setStatus('Activity deleted', 'ok');
              await Promise.all([refreshDetail(), loadCalendar(), loadStats()]);
            } catch (err) {
              setStatus(err.message, 'error');
            }
          });
        };
        chip.appendChild(dot);
        chip.appendChild(name);
        chip.appendChild(remove);
        chips.appendChild(chip);
      });

      renderDayGrid(detail);
      renderAchievements(detail);
    };

    const renderDayGrid = (detail) => {
      const table = el('day-grid');
      table.innerHTML = '';
      if (!detail.activities.length) {
        return;
      }

      const completed = {};
      detail.days.forEach((state) => {
        if (state.completed) completed[state.activity_id + ':' + state.day] = true;
      });

      const header = document.createElement('tr');
      const corner = document.createElement('th');
      corner.className = 'name';
      corner.textContent = 'Activity';
      header.appendChild(corner);
      for (let day = 1; day <= detail.days_in_month; day += 1) {
        const th = document.createElement('th');
        th.textContent = day;
        header.appendChild(th);
      }
      table.appendChild(header);

      detail.activities.forEach((activity) => {
        const row = document.createElement('tr');
        const name = document.createElement('td');
        name.className = 'name';
        name.textContent = activity.name;
        row.appendChild(name);
        for (let day = 1; day <= detail.days_in_month; day += 1) {
          const cell = document.createElement('td');
          cell.className = 'toggle';
          if (completed[activity.id + ':' + day]) {
            cell.style.background = activity.color;
          }
          cell.onclick = () => toggleDay(day, activity.id, cell);
          row.appendChild(cell);
        }
        table.appendChild(row);
      });

      const percents = document.createElement('tr');
      const label = document.createElement('td');
      label.className = 'name';
      label.textContent = '% done';
      percents.appendChild(label);
      detail.daily_percent.forEach((percent) => {
        const cell = document.createElement('td');
        cell.textContent = percent;
        percents.appendChild(cell);
      });
      table.appendChild(percents);
    };

    const toggleDay = async (day, activityId, cell) => {
      try {
        await api('/api/activities/toggle', {
          card_id: currentCardId,
          activity_id: activityId,
          day: day
        });
        await Promise.all([refreshDetail(), loadCalendar(), loadStats()]);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const renderAchievements = (detail) => {
      const list = el('achievements');
      list.innerHTML = '';
      Object.entries(detail.achievements).forEach(([day, text]) => {
        const item = document.createElement('li');
        item.textContent = 'Day ' + day + ': ' + text;
        list.appendChild(item);
      });
    };

    const initCardForm = () => {
      const select = el('card-month');
      MONTH_NAMES.forEach((name) => {
        const option = document.createElement('option');
        option.value = name;
        option.textContent = name;
        select.appendChild(option);
      });
      const now = new Date();
      select.selectedIndex = now.getMonth();
      el('card-year').value = now.getFullYear();

      el('card-form').addEventListener('submit', (event) => {
        event.preventDefault();
        busy(el('card-add'), async () => {
          try {
            await api('/api/cards', {
              month: select.value,
              year: Number(el('card-year').value)
            });
            el('card-errors').classList.add('hidden');
            setStatus('Card created', 'ok');
            await Promise.all([loadCards(), loadCalendar(), loadStats()]);
          } catch (err) {
            showFieldErrors(el('card-errors'), err);
          }
        });
      });
    };

    el('activity-form').addEventListener('submit', (event) => {
      event.preventDefault();
      busy(el('activity-add'), async () => {
        try {
          await api('/api/activities', {
            card_id: currentCardId,
            name: el('activity-name').value
          });
          el('activity-name').value = '';
          el('activity-errors').classList.add('hidden');
          setStatus('Activity added', 'ok');
          await Promise.all([refreshDetail(), loadCalendar(), loadStats()]);
        } catch (err) {
          showFieldErrors(el('activity-errors'), err);
        }
      });
    });

    el('phrase-form').addEventListener('submit', (event) => {
      event.preventDefault();
      busy(el('phrase-save'), async () => {
        try {
          await api('/api/phrases', {
            card_id: currentCardId,
            phrase: el('phrase').value
          });
          setStatus('Phrase saved', 'ok');
        } catch (err) {
          setStatus(err.message, 'error');
        }
      });
    });

    el('achievement-form').addEventListener('submit', (event) => {
      event.preventDefault();
      busy(el('achievement-save'), async () => {
        try {
          await api('/api/achievements', {
            card_id: currentCardId,
            day: Number(el('achievement-day').value),
            text: el('achievement-text').value
          });
          el('achievement-text').value = '';
          setStatus('Achievement saved', 'ok');
          await refreshDetail();
        } catch (err) {
          setStatus(err.message, 'error');
        }
      });
    });

    el('detail-back').addEventListener('click', closeDetail);

    renderLegend();
    initCardForm();
    Promise.all([loadCards(), loadCalendar()])
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
