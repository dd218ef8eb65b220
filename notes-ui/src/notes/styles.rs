pub const NOTES_STYLES: &str = r#"
/* Page */
.notes-app {
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem 1rem;
    font-family: var(--font-family, system-ui, -apple-system, "Segoe UI", sans-serif);
    color: var(--text-primary, #1f2937);
}

.notes-header h1 {
    margin: 0 0 1.5rem;
    font-size: 2rem;
}

/* Form */
.note-form {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 1.5rem;
    margin-bottom: 2rem;
    background: var(--panel-bg, #ffffff);
    border-radius: var(--radius-lg, 12px);
    box-shadow: 0 5px 15px rgba(0, 0, 0, 0.08);
}

.note-form h2 {
    margin: 0;
    font-size: 1.25rem;
}

.note-form input,
.note-form textarea {
    padding: 0.75rem;
    border: 1px solid var(--border-color, #d1d5db);
    border-radius: var(--radius-md, 8px);
    font: inherit;
}

.note-form textarea {
    min-height: 120px;
    resize: vertical;
}

.form-buttons {
    display: flex;
    gap: 0.5rem;
}

.btn {
    padding: 0.625rem 1.25rem;
    border: none;
    border-radius: var(--radius-md, 8px);
    cursor: pointer;
    font-weight: 600;
}

.btn-primary {
    background: var(--accent-bg, #667eea);
    color: white;
}

.btn-primary:disabled {
    opacity: 0.6;
    cursor: progress;
}

.btn-secondary {
    background: var(--secondary-bg, #e5e7eb);
    color: var(--text-primary, #1f2937);
}

/* List */
.notes-list {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1rem;
}

.no-notes,
.notes-loading {
    grid-column: 1 / -1;
    text-align: center;
    color: var(--text-secondary, #6b7280);
    font-style: italic;
}

.note-card {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding: 1.25rem;
    background: var(--panel-bg, #ffffff);
    border-radius: var(--radius-lg, 12px);
    box-shadow: 0 3px 10px rgba(0, 0, 0, 0.08);
}

.note-card h3 {
    margin: 0;
    word-break: break-word;
}

.note-card p {
    margin: 0;
    white-space: pre-wrap;
    word-break: break-word;
}

.note-meta {
    font-size: 0.75rem;
    color: var(--text-secondary, #6b7280);
}

.note-actions {
    display: flex;
    gap: 0.5rem;
    margin-top: auto;
}

.btn-small {
    padding: 0.375rem 0.75rem;
    border: none;
    border-radius: var(--radius-sm, 6px);
    cursor: pointer;
    font-size: 0.875rem;
}

.btn-edit {
    background: var(--edit-bg, #fbbf24);
}

.btn-delete {
    background: var(--danger-bg, #f44336);
    color: white;
}

/* Notifications */
.toast-stack {
    position: fixed;
    top: 20px;
    right: 20px;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    z-index: 1000;
}

.toast {
    padding: 15px 25px;
    color: white;
    border-radius: 8px;
    box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
    animation: slideIn 0.3s ease-out;
}

.toast.leaving {
    animation: slideOut 0.3s ease-out forwards;
}

.toast-success {
    background: #4caf50;
}

.toast-error {
    background: #f44336;
}

@keyframes slideIn {
    from { transform: translateX(120%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(120%); opacity: 0; }
}
"#;
