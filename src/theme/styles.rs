//! Global CSS styles for the family homepage.
//!
//! Warm, photo-first palette. Hover emphasis is applied inline from the
//! view-state; the stylesheet only provides the transitions and base look.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --paper: #fdfaf5;
  --card: #ffffff;
  --border: #ece4d8;

  /* Accents */
  --sky: #3498db;
  --sky-glow: rgba(52, 152, 219, 0.3);
  --terracotta: #c8553d;
  --olive: #6b8f71;

  /* Text */
  --text-primary: #2d2a26;
  --text-secondary: rgba(45, 42, 38, 0.7);

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', Helvetica, sans-serif;

  /* Transitions */
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--text-primary);
  line-height: 1.6;
}

.homepage {
  max-width: 1080px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  font-weight: 600;
}

.section-header {
  font-family: var(--font-serif);
  font-size: 1.6rem;
  font-weight: 500;
  margin-bottom: 1rem;
}

.tagline {
  color: var(--text-secondary);
  font-style: italic;
}

/* === Profile Header === */
.profile-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  text-align: center;
}

.profile-image {
  width: 180px;
  height: 180px;
  border-radius: 50%;
  object-fit: cover;
  border: 4px solid var(--card);
  box-shadow: 0 10px 30px var(--sky-glow);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

/* === Live Clock === */
.live-clock {
  align-self: center;
  padding: 1.5rem 3rem;
  border-radius: 16px;
  background: linear-gradient(135deg, var(--sky), #2c3e50);
  color: #fff;
  text-align: center;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.clock-time {
  font-size: 2.75rem;
  font-weight: 700;
  letter-spacing: 0.08em;
  font-variant-numeric: tabular-nums;
}

.clock-date {
  font-size: 1rem;
  opacity: 0.85;
}

/* === Family Cards === */
.family-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.5rem;
}

.family-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.25rem;
  text-align: center;
}

.family-image {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 10px;
  box-shadow: 0 6px 15px rgba(0,0,0,0.1);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.family-name {
  margin-top: 0.75rem;
  font-family: var(--font-serif);
}

.family-relation {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

/* === Gallery === */
.category-tabs {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.25rem;
}

.category-tab {
  padding: 0.4rem 1.1rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: var(--card);
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.category-tab.active {
  background: var(--terracotta);
  border-color: var(--terracotta);
  color: #fff;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1rem;
}

.gallery-item {
  overflow: hidden;
  border-radius: 12px;
  background: var(--card);
  transition: transform var(--transition-normal);
}

.gallery-item img {
  width: 100%;
  height: 200px;
  object-fit: cover;
  display: block;
}

.gallery-item.main-featured img {
  height: 380px;
}

.gallery-item figcaption {
  padding: 0.6rem 0.9rem;
  font-size: 0.95rem;
}

/* === Music Player === */
.music-player audio {
  width: 100%;
}

/* === Contact Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
  max-width: 620px;
}

.contact-form input,
.contact-form textarea {
  padding: 0.7rem 0.9rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font: inherit;
  background: var(--card);
}

.contact-form input:focus,
.contact-form textarea:focus {
  outline: 2px solid var(--sky);
  border-color: transparent;
}

.btn-primary {
  align-self: flex-start;
  padding: 0.7rem 1.6rem;
  border: none;
  border-radius: 8px;
  background: var(--olive);
  color: #fff;
  font: inherit;
  cursor: pointer;
}
"#;
