//! Global CSS styles for Reelrank.
//!
//! Dark cinema-shelf aesthetic. Class names follow BEM with the
//! component name as the block.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SHELF (Backgrounds) */
  --shelf-black: #0b0d12;
  --shelf-deep: #10131b;
  --shelf-border: #1e2330;

  /* MARQUEE (Badges, Alerts) */
  --badge-red: #dc2626;

  /* STAR (Ratings) */
  --star-gold: #facc15;

  /* ACCENT (Buttons, Focus) */
  --accent: #4f8cff;
  --accent-glow: rgba(79, 140, 255, 0.3);

  /* TEXT */
  --text-primary: #f5f6f8;
  --text-secondary: rgba(245, 246, 248, 0.72);
  --text-muted: rgba(245, 246, 248, 0.5);

  /* Typography */
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--shelf-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--text-primary);
  letter-spacing: 0.02em;
}

.tagline {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  margin-top: 0.5rem;
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-secondary);
  line-height: 1.6;
}

/* === Buttons === */
.btn-enter {
  margin-top: 2rem;
  padding: 1rem 3rem;
  background: var(--accent);
  border: none;
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-lg);
  font-weight: 600;
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-enter:hover {
  box-shadow: 0 0 30px var(--accent-glow);
}

.btn-enter:disabled {
  background: var(--shelf-border);
  color: var(--text-muted);
  cursor: default;
  box-shadow: none;
}

.btn-back {
  padding: 0.5rem 1.25rem;
  background: transparent;
  border: 1px solid var(--shelf-border);
  border-radius: 6px;
  color: var(--text-secondary);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all 0.2s ease;
}

.btn-back:hover {
  border-color: var(--accent);
  color: var(--text-primary);
}

/* === Landing Page === */
.landing {
  min-height: 100vh;
  background: var(--shelf-black);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 4rem 2rem;
}

.landing-header {
  text-align: center;
  max-width: 800px;
  margin-bottom: 3rem;
}

.vision-section {
  max-width: 600px;
  text-align: center;
}

/* === Trending Page === */
.trending {
  min-height: 100vh;
  background: var(--shelf-black);
  padding: 3rem 2.5rem;
}

.trending-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  margin-bottom: 2.5rem;
}

.trending-row {
  display: flex;
  gap: 1.25rem;
  overflow-x: auto;
  padding: 1.5rem 0.5rem 2rem;
}

.trending-loading {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 4rem 0;
  color: var(--text-secondary);
}

.trending-empty {
  padding: 4rem 0;
  text-align: center;
  color: var(--text-muted);
}

.loading-spinner {
  width: 2rem;
  height: 2rem;
  border: 2px solid var(--shelf-border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Numbered Media Card === */
.numbered-media-card {
  position: relative;
  flex: 0 0 auto;
  width: 180px;
}

.numbered-media-card__poster-wrap {
  position: relative;
  width: 100%;
  aspect-ratio: 2 / 3;
  cursor: pointer;
}

.numbered-media-card__poster {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 4px;
  display: block;
}

/* Rank numeral bleeds past the tile on the bottom-left */
.numbered-media-card__rank {
  position: absolute;
  bottom: -10%;
  left: -10%;
  width: 120%;
  height: 120%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3.5rem;
  font-weight: 700;
  color: white;
  text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.7);
  pointer-events: none;
  z-index: 10;
}

.numbered-media-card__badge-row {
  position: absolute;
  top: 0.5rem;
  left: 0;
  right: 0;
  display: flex;
  justify-content: center;
  z-index: 11;
}

.numbered-media-card__badge {
  background: var(--badge-red);
  color: white;
  font-size: var(--text-xs);
  font-weight: 500;
  padding: 0.125rem 0.5rem;
  border-radius: 4px;
}

/* Info overlay hidden until the tile is hovered */
.numbered-media-card__info {
  position: absolute;
  inset: 0;
  background: linear-gradient(
    to top,
    rgba(0, 0, 0, 0.9),
    rgba(0, 0, 0, 0.5) 50%,
    transparent
  );
  opacity: 0;
  transition: opacity var(--transition-normal);
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 0.75rem;
  border-radius: 4px;
  z-index: 12;
}

.numbered-media-card__poster-wrap:hover .numbered-media-card__info {
  opacity: 1;
}

.numbered-media-card__info-title {
  color: white;
  font-size: var(--text-lg);
  font-weight: 600;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
  margin-bottom: 0.5rem;
}

.numbered-media-card__info-meta {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.numbered-media-card__info-rating {
  display: flex;
  align-items: center;
  gap: 0.25rem;
}

.numbered-media-card__star {
  color: var(--star-gold);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(11, 13, 18, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.modal-content {
  background: var(--shelf-deep);
  border: 1px solid var(--shelf-border);
  border-radius: 8px;
  max-width: 480px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 1.5rem;
  border-bottom: 1px solid var(--shelf-border);
}

.modal-close-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-xl);
  cursor: pointer;
  padding: 0.25rem 0.5rem;
  transition: color 0.2s ease;
}

.modal-close-btn:hover {
  color: var(--text-primary);
}

.modal-body {
  padding: 1.5rem;
}

/* === Media Details Modal === */
.media-details-modal {
  max-width: 640px;
}

.media-details-modal__title {
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--text-primary);
}

.media-details-modal__backdrop {
  width: 100%;
  border-radius: 6px;
  display: block;
  margin-bottom: 1rem;
}

.media-details-modal__meta {
  display: flex;
  align-items: center;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 1rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.media-details-modal__rating {
  color: var(--star-gold);
  font-weight: 600;
}

.media-details-modal__new {
  background: var(--badge-red);
  color: white;
  font-size: var(--text-xs);
  font-weight: 500;
  padding: 0.125rem 0.5rem;
  border-radius: 4px;
}

.media-details-modal__overview {
  color: var(--text-secondary);
  line-height: 1.6;
}
"#;
