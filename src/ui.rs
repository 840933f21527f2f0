pub fn index_html() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Planner</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-primary: #0f172a;
      --bg-secondary: #1e293b;
      --bg-card: #1e293b;
      --text-primary: #f1f5f9;
      --text-secondary: #94a3b8;
      --border: rgba(148, 163, 184, 0.2);
      --accent: #38bdf8;
      --accent-soft: rgba(56, 189, 248, 0.15);
      --danger: #f87171;
      --gold: #fbbf24;
      --shadow: 0 18px 40px rgba(2, 6, 23, 0.45);
    }

    body.light {
      --bg-primary: #f8fafc;
      --bg-secondary: #ffffff;
      --bg-card: #ffffff;
      --text-primary: #1e293b;
      --text-secondary: #64748b;
      --border: rgba(100, 116, 139, 0.25);
      --accent: #0284c7;
      --accent-soft: rgba(2, 132, 199, 0.1);
      --shadow: 0 18px 40px rgba(15, 23, 42, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg-primary);
      color: var(--text-primary);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 9px 14px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: #0f172a;
      transition: transform 120ms ease;
    }
    button:active { transform: scale(0.97); }
    button.ghost {
      background: transparent;
      color: var(--text-secondary);
      border: 1px solid var(--border);
    }
    button.danger-link {
      background: transparent;
      color: var(--text-secondary);
      padding: 2px 6px;
    }
    button.danger-link:hover { color: var(--danger); }

    input, select, textarea {
      font: inherit;
      color: var(--text-primary);
      background: var(--bg-primary);
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 9px 12px;
    }
    input[type="color"] { padding: 2px; width: 44px; height: 38px; }

    .hidden { display: none !important; }

    /* login gate */
    #login-view {
      min-height: 100vh;
      display: grid;
      place-items: center;
      padding: 24px;
    }
    .login-card {
      width: min(380px, 100%);
      background: var(--bg-card);
      border: 1px solid var(--border);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 14px;
    }
    .login-card h1 {
      font-family: "Fraunces", "Georgia", serif;
      margin: 0;
      font-size: 1.8rem;
    }
    .login-card p { margin: 0; color: var(--text-secondary); font-size: 0.95rem; }

    /* app shell */
    #app-view {
      display: grid;
      grid-template-columns: 240px 1fr 280px;
      gap: 20px;
      padding: 20px;
      max-width: 1280px;
      margin: 0 auto;
    }

    .topbar {
      grid-column: 1 / -1;
      display: flex;
      align-items: center;
      gap: 10px;
      justify-content: flex-end;
    }
    .topbar .brand {
      margin-right: auto;
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.3rem;
      font-weight: 600;
    }
    #streak-display {
      color: var(--gold);
      font-weight: 600;
      font-size: 0.95rem;
    }
    #user-name { color: var(--text-secondary); }

    .card {
      background: var(--bg-card);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 18px;
    }

    aside .card, .rail .card { margin-bottom: 16px; }

    .card h2 {
      margin: 0 0 12px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--text-secondary);
    }

    .category-item {
      display: flex;
      align-items: center;
      gap: 8px;
      padding: 8px 10px;
      border-radius: 10px;
      cursor: pointer;
      color: var(--text-primary);
    }
    .category-item:hover { background: var(--accent-soft); }
    .category-item.active { background: var(--accent-soft); color: var(--accent); font-weight: 600; }
    .category-item .dot { width: 10px; height: 10px; border-radius: 50%; flex: none; }
    .category-item .delete { margin-left: auto; }
    .category-form { display: flex; gap: 6px; margin-top: 12px; }
    .category-form input[type="text"] { flex: 1; min-width: 0; }

    .add-row { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 14px; }
    .add-row input[type="text"] { flex: 2 1 200px; min-width: 0; }

    .list-controls {
      display: flex;
      align-items: center;
      gap: 8px;
      margin-bottom: 14px;
      flex-wrap: wrap;
    }
    .list-controls h1 { margin: 0 auto 0 0; font-size: 1.3rem; }

    .task-item {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 12px 14px;
      border: 1px solid var(--border);
      border-radius: 12px;
      margin-bottom: 8px;
      background: var(--bg-secondary);
    }
    .task-item.completed .task-text {
      text-decoration: line-through;
      color: var(--text-secondary);
    }
    .task-text { flex: 1; }
    .task-meta { font-size: 0.8rem; color: var(--text-secondary); white-space: nowrap; }
    .task-meta.overdue { color: var(--danger); font-weight: 600; }
    .chip {
      font-size: 0.75rem;
      font-weight: 600;
      color: white;
      border-radius: 999px;
      padding: 3px 10px;
      white-space: nowrap;
    }
    .empty-note { text-align: center; color: var(--text-secondary); padding: 28px 0; }

    .progress-track {
      height: 8px;
      border-radius: 999px;
      background: var(--border);
      overflow: hidden;
      margin-top: 10px;
    }
    .progress-fill { height: 100%; width: 0; background: var(--accent); transition: width 300ms ease; }

    #pomodoro-time {
      font-size: 2.4rem;
      font-weight: 600;
      text-align: center;
      letter-spacing: 0.05em;
      margin: 6px 0 12px;
      font-variant-numeric: tabular-nums;
    }
    .pomodoro-buttons { display: flex; gap: 8px; justify-content: center; }

    blockquote { margin: 0; color: var(--text-secondary); font-size: 0.92rem; font-style: italic; }
    blockquote footer { margin-top: 6px; font-style: normal; text-align: right; }

    /* modals */
    .modal {
      position: fixed;
      inset: 0;
      background: rgba(2, 6, 23, 0.6);
      display: grid;
      place-items: center;
      padding: 20px;
      z-index: 20;
    }
    .modal-content {
      width: min(560px, 100%);
      max-height: 85vh;
      overflow: auto;
      background: var(--bg-card);
      border: 1px solid var(--border);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 24px;
    }
    .modal-content h2 { margin: 0 0 14px; font-size: 1.2rem; }
    .modal-close { float: right; }

    .achievement {
      display: flex;
      gap: 12px;
      align-items: center;
      padding: 12px;
      border-radius: 12px;
      border: 1px solid var(--border);
      margin-bottom: 8px;
    }
    .achievement.locked { opacity: 0.45; }
    .achievement .medal { font-size: 1.6rem; }
    .achievement p { margin: 2px 0 0; font-size: 0.85rem; color: var(--text-secondary); }

    #dashboard-chart { width: 100%; height: 220px; display: block; }
    .bar { fill: var(--accent); }
    .chart-label { fill: var(--text-secondary); font-size: 11px; }
    .legend-row { display: flex; align-items: center; gap: 8px; padding: 4px 0; font-size: 0.9rem; }
    .legend-row .dot { width: 10px; height: 10px; border-radius: 50%; }
    .legend-row .count { margin-left: auto; color: var(--text-secondary); }

    #toasts {
      position: fixed;
      bottom: 20px;
      right: 20px;
      display: grid;
      gap: 10px;
      z-index: 30;
    }
    .toast {
      background: var(--gold);
      color: #1e293b;
      border-radius: 12px;
      padding: 12px 16px;
      box-shadow: var(--shadow);
      max-width: 320px;
    }
    .toast p { margin: 2px 0 0; font-size: 0.85rem; }

    @media (max-width: 960px) {
      #app-view { grid-template-columns: 1fr; }
    }
  </style>
</head>
<body>
  <div id="login-view">
    <form class="login-card" id="login-form">
      <h1>Planner</h1>
      <p>Sign in with a name to open your planner. The same name always opens the same board.</p>
      <input type="text" id="login-name" placeholder="Your name" autocomplete="username" />
      <button type="submit">Sign in</button>
    </form>
  </div>

  <div id="app-view" class="hidden">
    <div class="topbar">
      <span class="brand">Planner</span>
      <span id="streak-display" class="hidden"></span>
      <span id="user-name"></span>
      <button class="ghost" id="theme-toggle" title="Toggle theme">Theme</button>
      <button class="ghost" id="open-dashboard">Dashboard</button>
      <button class="ghost" id="open-achievements">Badges</button>
      <button class="ghost" id="logout-btn">Sign out</button>
    </div>

    <aside>
      <div class="card">
        <h2>Categories</h2>
        <div id="category-list"></div>
        <div class="category-form">
          <input type="text" id="new-category-name" placeholder="New category" />
          <input type="color" id="new-category-color" value='#8b5cf6' />
          <button id="add-category-btn" type="button">+</button>
        </div>
      </div>
    </aside>

    <main class="card">
      <div class="list-controls">
        <h1 id="main-title">All tasks</h1>
        <select id="sort-select">
          <option value="createdAt">Newest first</option>
          <option value="dueDate">By due date</option>
          <option value="ai">Assistant order</option>
        </select>
        <button class="ghost" id="ai-sort-btn">Smart sort</button>
        <button id="open-planner">Plan with assistant</button>
      </div>

      <div class="add-row">
        <input type="text" id="new-task-input" placeholder="What needs doing? Try: submit report friday #Work" />
        <button class="ghost" id="magic-fill-btn" title="Let the assistant fill the form">Magic fill</button>
        <input type="date" id="new-task-due-date" />
        <select id="task-category-select"></select>
        <button id="add-task-btn">Add</button>
      </div>

      <div id="task-list"></div>
    </main>

    <div class="rail">
      <div class="card">
        <h2>Today</h2>
        <div id="progress-text">No tasks created today.</div>
        <div class="progress-track"><div class="progress-fill" id="progress-fill"></div></div>
      </div>
      <div class="card">
        <h2>Pomodoro</h2>
        <div id="pomodoro-time">25:00</div>
        <div class="pomodoro-buttons">
          <button id="pomodoro-start-pause">Start</button>
          <button class="ghost" id="pomodoro-reset">Reset</button>
        </div>
      </div>
      <div class="card">
        <h2>Quote</h2>
        <blockquote>
          <span id="quote-text"></span>
          <footer id="quote-author"></footer>
        </blockquote>
      </div>
    </div>
  </div>

  <div class="modal hidden" id="planner-modal">
    <div class="modal-content">
      <button class="ghost modal-close" data-close="planner-modal">Close</button>
      <h2>Plan with the assistant</h2>
      <p style="color: var(--text-secondary); font-size: 0.9rem;">Describe a goal and get a handful of concrete tasks back.</p>
      <textarea id="ai-goal-input" rows="3" style="width: 100%;" placeholder="e.g. prepare the quarterly review"></textarea>
      <label style="display: flex; gap: 8px; align-items: center; margin: 12px 0; font-size: 0.9rem;">
        <input type="checkbox" id="ai-include-pomodoro" /> Estimate focus sessions per task
      </label>
      <button id="generate-tasks-btn">Generate tasks</button>
    </div>
  </div>

  <div class="modal hidden" id="dashboard-modal">
    <div class="modal-content">
      <button class="ghost modal-close" data-close="dashboard-modal">Close</button>
      <h2>Last 7 days</h2>
      <svg id="dashboard-chart" viewBox="0 0 520 220" role="img" aria-label="Completed tasks per day"></svg>
      <h2 style="margin-top: 18px;">Tasks by category</h2>
      <div id="category-legend"></div>
    </div>
  </div>

  <div class="modal hidden" id="achievements-modal">
    <div class="modal-content">
      <button class="ghost modal-close" data-close="achievements-modal">Close</button>
      <h2>Badges</h2>
      <div id="achievements-list"></div>
    </div>
  </div>

  <div id="toasts"></div>

  <script>
    const quotes = [
      { text: 'The secret of getting ahead is getting started.', author: 'Mark Twain' },
      { text: 'It always seems impossible until it is done.', author: 'Nelson Mandela' },
      { text: 'Focus on being productive instead of busy.', author: 'Tim Ferriss' },
      { text: 'A year from now you may wish you had started today.', author: 'Karen Lamb' }
    ];

    let session = null;
    let doc = null;
    let catalog = [];
    let selectedCategoryId = 'all';
    let currentSort = 'createdAt';

    const el = (id) => document.getElementById(id);

    async function api(path, options = {}) {
      const headers = { 'content-type': 'application/json' };
      if (session) headers['authorization'] = 'Bearer ' + session.token;
      const res = await fetch(path, { ...options, headers });
      if (res.status === 401) {
        endSession();
        throw new Error('Session expired, please sign in again.');
      }
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      if (res.status === 204) return null;
      return res.json();
    }

    function saveSession() {
      localStorage.setItem('session', JSON.stringify(session));
    }

    function endSession() {
      session = null;
      doc = null;
      localStorage.removeItem('session');
      el('app-view').classList.add('hidden');
      el('login-view').classList.remove('hidden');
    }

    async function startApp() {
      el('login-view').classList.add('hidden');
      el('app-view').classList.remove('hidden');
      el('user-name').textContent = session.user.name;
      try {
        if (!catalog.length) catalog = await api('/api/achievements');
        applyDocument(await api('/api/document'));
      } catch (err) {
        alert(err.message);
      }
    }

    function applyDocument(data) {
      doc = data.document;
      (data.unlocked || []).forEach(showAchievementToast);
      renderAll();
    }

    function renderAll() {
      renderCategories();
      renderTasks();
      renderProgress();
      renderStreak();
    }

    function renderCategories() {
      const list = el('category-list');
      list.innerHTML = '';
      const all = document.createElement('div');
      all.className = 'category-item' + (selectedCategoryId === 'all' ? ' active' : '');
      all.textContent = 'All tasks';
      all.onclick = () => selectCategory('all');
      list.appendChild(all);

      const select = el('task-category-select');
      select.innerHTML = '';
      doc.categories.forEach((cat) => {
        const row = document.createElement('div');
        row.className = 'category-item' + (selectedCategoryId === cat.id ? ' active' : '');
        const dot = document.createElement('span');
        dot.className = 'dot';
        dot.style.backgroundColor = cat.color;
        const name = document.createElement('span');
        name.textContent = cat.name;
        const remove = document.createElement('button');
        remove.className = 'danger-link delete';
        remove.textContent = 'x';
        remove.onclick = (event) => {
          event.stopPropagation();
          deleteCategory(cat);
        };
        row.append(dot, name, remove);
        row.onclick = () => selectCategory(cat.id);
        list.appendChild(row);

        const option = document.createElement('option');
        option.value = cat.id;
        option.textContent = cat.name;
        select.appendChild(option);
      });
    }

    function selectCategory(id) {
      selectedCategoryId = id;
      const cat = doc.categories.find((c) => c.id === id);
      el('main-title').textContent = cat ? cat.name : 'All tasks';
      renderAll();
    }

    function visibleTasks() {
      let tasks = selectedCategoryId === 'all'
        ? doc.tasks.slice()
        : doc.tasks.filter((t) => t.categoryId === selectedCategoryId);
      if (currentSort === 'dueDate') {
        tasks.sort((a, b) => (a.dueDate || '9999-12-31').localeCompare(b.dueDate || '9999-12-31'));
      } else if (currentSort === 'createdAt') {
        tasks.sort((a, b) => (b.createdAt || 0) - (a.createdAt || 0));
      }
      return tasks;
    }

    function renderTasks() {
      const list = el('task-list');
      list.innerHTML = '';
      const tasks = visibleTasks();
      if (!tasks.length) {
        const note = document.createElement('p');
        note.className = 'empty-note';
        note.textContent = 'Nothing here yet. Add a task above.';
        list.appendChild(note);
        return;
      }
      const todayStart = new Date();
      todayStart.setHours(0, 0, 0, 0);
      tasks.forEach((task) => {
        const item = document.createElement('div');
        item.className = 'task-item' + (task.completed ? ' completed' : '');

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = task.completed;
        checkbox.onchange = () => toggleTask(task, checkbox.checked);

        const text = document.createElement('span');
        text.className = 'task-text';
        text.textContent = task.text;

        item.append(checkbox, text);

        const firstStep = document.createElement('button');
        firstStep.className = 'danger-link';
        firstStep.title = 'Ask the assistant for a five-minute first step';
        firstStep.textContent = '?';
        firstStep.onclick = () => askFirstStep(task, firstStep);
        item.appendChild(firstStep);

        if (task.pomodoros) {
          const pomo = document.createElement('span');
          pomo.className = 'task-meta';
          pomo.title = 'Estimated focus sessions';
          pomo.textContent = 'x' + task.pomodoros;
          item.appendChild(pomo);
        }

        if (task.dueDate) {
          const due = document.createElement('span');
          const overdue = !task.completed && new Date(task.dueDate) < todayStart;
          due.className = 'task-meta' + (overdue ? ' overdue' : '');
          due.textContent = task.dueDate;
          item.appendChild(due);
        }

        const cat = doc.categories.find((c) => c.id === task.categoryId);
        if (cat) {
          const chip = document.createElement('span');
          chip.className = 'chip';
          chip.style.backgroundColor = cat.color;
          chip.textContent = cat.name;
          item.appendChild(chip);
        }

        const remove = document.createElement('button');
        remove.className = 'danger-link';
        remove.textContent = 'x';
        remove.onclick = () => deleteTask(task);
        item.appendChild(remove);

        list.appendChild(item);
      });
    }

    function renderProgress() {
      const todayStart = new Date();
      todayStart.setHours(0, 0, 0, 0);
      const todayTasks = doc.tasks.filter((t) => t.createdAt && t.createdAt >= todayStart.getTime());
      const done = todayTasks.filter((t) => t.completed).length;
      const percent = todayTasks.length ? (done / todayTasks.length) * 100 : 0;
      el('progress-text').textContent = todayTasks.length
        ? done + ' of ' + todayTasks.length + ' tasks done today.'
        : 'No tasks created today.';
      el('progress-fill').style.width = percent + '%';
    }

    function renderStreak() {
      const streak = doc.gamification.streak || 0;
      const display = el('streak-display');
      if (streak > 1) {
        display.textContent = streak + '-day streak';
        display.classList.remove('hidden');
      } else {
        display.classList.add('hidden');
      }
    }

    async function toggleTask(task, completed) {
      try {
        applyDocument(await api('/api/tasks/' + task.id + '/toggle', {
          method: 'POST',
          body: JSON.stringify({ completed })
        }));
      } catch (err) { alert(err.message); renderAll(); }
    }

    async function deleteTask(task) {
      try {
        applyDocument(await api('/api/tasks/' + task.id, { method: 'DELETE' }));
      } catch (err) { alert(err.message); }
    }

    async function deleteCategory(cat) {
      if (!confirm('Delete "' + cat.name + '" and every task in it?')) return;
      try {
        if (selectedCategoryId === cat.id) selectedCategoryId = 'all';
        applyDocument(await api('/api/categories/' + cat.id, { method: 'DELETE' }));
        el('main-title').textContent = 'All tasks';
      } catch (err) { alert(err.message); }
    }

    async function askFirstStep(task, button) {
      button.disabled = true;
      try {
        const data = await api('/api/assistant/first_step', {
          method: 'POST',
          body: JSON.stringify({ task_id: task.id })
        });
        alert('First step suggestion:\n\n' + data.first_step);
      } catch (err) { alert(err.message); }
      button.disabled = false;
    }

    el('login-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const name = el('login-name').value.trim();
      if (!name) return;
      try {
        const data = await fetch('/api/login', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ name })
        });
        if (!data.ok) throw new Error(await data.text());
        session = await data.json();
        saveSession();
        startApp();
      } catch (err) { alert(err.message); }
    });

    el('logout-btn').addEventListener('click', async () => {
      try { await api('/api/logout', { method: 'POST' }); } catch (err) { /* session is gone either way */ }
      endSession();
    });

    el('add-task-btn').addEventListener('click', async () => {
      const text = el('new-task-input').value.trim();
      const categoryId = el('task-category-select').value;
      if (!text || !categoryId) return;
      try {
        applyDocument(await api('/api/tasks', {
          method: 'POST',
          body: JSON.stringify({
            text,
            category_id: categoryId,
            due_date: el('new-task-due-date').value || null
          })
        }));
        el('new-task-input').value = '';
        el('new-task-due-date').value = '';
      } catch (err) { alert(err.message); }
    });

    el('add-category-btn').addEventListener('click', async () => {
      const name = el('new-category-name').value.trim();
      if (!name) return;
      try {
        applyDocument(await api('/api/categories', {
          method: 'POST',
          body: JSON.stringify({ name, color: el('new-category-color').value })
        }));
        el('new-category-name').value = '';
      } catch (err) { alert(err.message); }
    });

    el('magic-fill-btn').addEventListener('click', async () => {
      const input = el('new-task-input').value.trim();
      if (!input) return;
      const button = el('magic-fill-btn');
      button.disabled = true;
      try {
        const data = await api('/api/assistant/parse', {
          method: 'POST',
          body: JSON.stringify({ user_input: input })
        });
        if (data.text) el('new-task-input').value = data.text;
        if (data.due_date) el('new-task-due-date').value = data.due_date;
        if (data.category_id) el('task-category-select').value = data.category_id;
      } catch (err) { alert(err.message); }
      button.disabled = false;
    });

    el('ai-sort-btn').addEventListener('click', async () => {
      const button = el('ai-sort-btn');
      button.disabled = true;
      button.textContent = 'Sorting...';
      try {
        const body = selectedCategoryId === 'all' ? {} : { category_id: selectedCategoryId };
        applyDocument(await api('/api/assistant/sort', {
          method: 'POST',
          body: JSON.stringify(body)
        }));
        currentSort = 'ai';
        el('sort-select').value = 'ai';
        renderTasks();
      } catch (err) { alert(err.message); }
      button.disabled = false;
      button.textContent = 'Smart sort';
    });

    el('generate-tasks-btn').addEventListener('click', async () => {
      const goal = el('ai-goal-input').value.trim();
      if (!goal) return;
      const button = el('generate-tasks-btn');
      button.disabled = true;
      button.textContent = 'Thinking...';
      try {
        applyDocument(await api('/api/assistant/plan', {
          method: 'POST',
          body: JSON.stringify({
            goal,
            include_pomodoro: el('ai-include-pomodoro').checked
          })
        }));
        el('ai-goal-input').value = '';
        closeModal('planner-modal');
      } catch (err) { alert(err.message); }
      button.disabled = false;
      button.textContent = 'Generate tasks';
    });

    el('sort-select').addEventListener('change', (event) => {
      currentSort = event.target.value;
      renderTasks();
    });

    /* modals */
    function openModal(id) { el(id).classList.remove('hidden'); }
    function closeModal(id) { el(id).classList.add('hidden'); }
    document.querySelectorAll('.modal-close').forEach((button) => {
      button.addEventListener('click', () => closeModal(button.dataset.close));
    });
    document.querySelectorAll('.modal').forEach((modal) => {
      modal.addEventListener('click', (event) => {
        if (event.target === modal) modal.classList.add('hidden');
      });
    });
    el('open-planner').addEventListener('click', () => openModal('planner-modal'));
    el('open-achievements').addEventListener('click', () => {
      renderAchievements();
      openModal('achievements-modal');
    });
    el('open-dashboard').addEventListener('click', async () => {
      try {
        renderDashboard(await api('/api/stats'));
        openModal('dashboard-modal');
      } catch (err) { alert(err.message); }
    });

    function renderAchievements() {
      const list = el('achievements-list');
      list.innerHTML = '';
      const unlocked = new Set(doc.gamification.unlocked || []);
      catalog.forEach((achievement) => {
        const row = document.createElement('div');
        row.className = 'achievement' + (unlocked.has(achievement.id) ? '' : ' locked');
        const medal = document.createElement('span');
        medal.className = 'medal';
        medal.textContent = unlocked.has(achievement.id) ? '★' : '☆';
        const body = document.createElement('div');
        const title = document.createElement('strong');
        title.textContent = achievement.name;
        const description = document.createElement('p');
        description.textContent = achievement.description;
        body.append(title, description);
        row.append(medal, body);
        list.appendChild(row);
      });
    }

    function renderDashboard(stats) {
      const svg = el('dashboard-chart');
      const width = 520;
      const height = 220;
      const paddingX = 30;
      const paddingY = 30;
      const days = stats.last_7_days;
      const max = Math.max(1, ...days.map((d) => d.completed));
      const barWidth = (width - paddingX * 2) / days.length - 10;
      let content = '';
      days.forEach((day, index) => {
        const x = paddingX + index * ((width - paddingX * 2) / days.length) + 5;
        const barHeight = (day.completed / max) * (height - paddingY * 2);
        const y = height - paddingY - barHeight;
        content += '<rect class="bar" x="' + x + '" y="' + y + '" width="' + barWidth +
          '" height="' + barHeight + '" rx="4"></rect>';
        content += '<text class="chart-label" x="' + (x + barWidth / 2) + '" y="' + (height - 10) +
          '" text-anchor="middle">' + day.date.slice(5) + '</text>';
        if (day.completed > 0) {
          content += '<text class="chart-label" x="' + (x + barWidth / 2) + '" y="' + (y - 6) +
            '" text-anchor="middle">' + day.completed + '</text>';
        }
      });
      svg.innerHTML = content;

      const legend = el('category-legend');
      legend.innerHTML = '';
      if (!stats.categories.length) {
        const note = document.createElement('p');
        note.className = 'empty-note';
        note.textContent = 'No tasks yet.';
        legend.appendChild(note);
        return;
      }
      stats.categories.forEach((slice) => {
        const row = document.createElement('div');
        row.className = 'legend-row';
        const dot = document.createElement('span');
        dot.className = 'dot';
        dot.style.backgroundColor = slice.color;
        const name = document.createElement('span');
        name.textContent = slice.name;
        const count = document.createElement('span');
        count.className = 'count';
        count.textContent = slice.count;
        row.append(dot, name, count);
        legend.appendChild(row);
      });
    }

    function showAchievementToast(id) {
      const achievement = catalog.find((a) => a.id === id);
      if (!achievement) return;
      const toast = document.createElement('div');
      toast.className = 'toast';
      const title = document.createElement('strong');
      title.textContent = 'Badge earned: ' + achievement.name;
      const description = document.createElement('p');
      description.textContent = achievement.description;
      toast.append(title, description);
      el('toasts').appendChild(toast);
      setTimeout(() => toast.remove(), 5000);
    }

    /* pomodoro, fully client-side */
    const POMODORO_SECONDS = 25 * 60;
    let remaining = POMODORO_SECONDS;
    let ticking = null;

    function renderTimer() {
      const minutes = String(Math.floor(remaining / 60)).padStart(2, '0');
      const seconds = String(remaining % 60).padStart(2, '0');
      el('pomodoro-time').textContent = minutes + ':' + seconds;
    }

    el('pomodoro-start-pause').addEventListener('click', () => {
      if (ticking) {
        clearInterval(ticking);
        ticking = null;
        el('pomodoro-start-pause').textContent = 'Start';
        return;
      }
      el('pomodoro-start-pause').textContent = 'Pause';
      ticking = setInterval(() => {
        remaining -= 1;
        if (remaining <= 0) {
          clearInterval(ticking);
          ticking = null;
          remaining = POMODORO_SECONDS;
          el('pomodoro-start-pause').textContent = 'Start';
          alert('Focus session finished. Take a break!');
        }
        renderTimer();
      }, 1000);
    });

    el('pomodoro-reset').addEventListener('click', () => {
      clearInterval(ticking);
      ticking = null;
      remaining = POMODORO_SECONDS;
      el('pomodoro-start-pause').textContent = 'Start';
      renderTimer();
    });

    /* theme, persisted locally */
    function applyTheme(theme) {
      document.body.classList.toggle('light', theme === 'light');
    }
    el('theme-toggle').addEventListener('click', () => {
      const next = document.body.classList.contains('light') ? 'dark' : 'light';
      localStorage.setItem('theme', next);
      applyTheme(next);
    });

    /* boot */
    applyTheme(localStorage.getItem('theme'));
    const quote = quotes[Math.floor(Math.random() * quotes.length)];
    el('quote-text').textContent = '"' + quote.text + '"';
    el('quote-author').textContent = '- ' + quote.author;
    renderTimer();

    const stored = localStorage.getItem('session');
    if (stored) {
      try { session = JSON.parse(stored); } catch (err) { session = null; }
      if (session) startApp();
    }
  </script>
</body>
</html>
"##;
