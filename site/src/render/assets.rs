//! Inline stylesheet and script for the home page.

/// Inline CSS for the page.
///
/// Dark theme with purple/blue gradients. `--mx`/`--my` on the hero are set by
/// the pointer handler in [`PAGE_JS`].
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#000;--fg:#fff;--fg2:#d1d5db;--fg3:#9ca3af;--purple:#a855f7;--blue:#3b82f6;--pink:#ec4899;--glass:rgba(255,255,255,.05);--border:rgba(255,255,255,.1)}
html{scroll-behavior:smooth}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:var(--bg);color:var(--fg);line-height:1.6;overflow-x:hidden;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
img{max-width:100%;display:block}
.container{max-width:80rem;margin:0 auto;padding:0 1.5rem}
.gradient-text{background:linear-gradient(90deg,#fff,#e9d5ff,#c084fc);-webkit-background-clip:text;background-clip:text;color:transparent}

.backdrop{position:fixed;inset:0;z-index:0;pointer-events:none;background:linear-gradient(135deg,rgba(88,28,135,.2),#000 50%,rgba(30,58,138,.2))}
.blob{position:absolute;border-radius:50%;filter:blur(64px);animation:pulse 4s ease-in-out infinite}
.blob-purple{top:0;left:25%;width:18rem;height:18rem;background:rgba(168,85,247,.1)}
.blob-blue{top:33%;right:25%;width:24rem;height:24rem;background:rgba(59,130,246,.1);animation-delay:2s}
.blob-pink{bottom:25%;left:33%;width:20rem;height:20rem;background:rgba(236,72,153,.1);animation-delay:4s}
@keyframes pulse{50%{opacity:.5}}

.nav{position:fixed;top:0;width:100%;z-index:50;backdrop-filter:blur(24px);background:rgba(0,0,0,.5);border-bottom:1px solid var(--border)}
.nav-inner{display:flex;align-items:center;justify-content:space-between;height:5rem}
.brand-name{font-size:1.25rem;font-weight:700}
.brand-tag{font-size:.75rem;color:var(--fg3)}
.nav-links{display:flex;gap:2rem}
.nav-links a{font-size:.875rem;color:var(--fg2)}
.nav-links a:hover{color:var(--fg)}

main{position:relative;z-index:10}
.hero{--mx:50%;--my:50%;min-height:100vh;display:flex;align-items:center;padding-top:5rem;background:radial-gradient(circle at var(--mx) var(--my),rgba(168,85,247,.15),transparent 50%)}
.hero h1{font-size:clamp(2.5rem,7vw,5rem);font-weight:900;line-height:1.05;margin-bottom:1.5rem}
.hero p{font-size:1.125rem;color:var(--fg2);max-width:42rem;margin-bottom:2.5rem}
.hero-actions{display:flex;gap:1rem;flex-wrap:wrap}
.btn{display:inline-flex;align-items:center;gap:.5rem;padding:.9rem 1.75rem;border-radius:9999px;font-weight:600;font-size:.95rem;border:1px solid var(--border);cursor:pointer;transition:transform .3s}
.btn:hover{transform:translateY(-2px)}
.btn-primary{background:linear-gradient(90deg,#7c3aed,#2563eb);border:none;color:#fff}
.btn-ghost{background:var(--glass);color:var(--fg)}
.btn:disabled{opacity:.6;cursor:wait}

section{padding:8rem 0}
.section-head{text-align:center;margin-bottom:4rem}
.section-head h2{font-size:clamp(2.25rem,5vw,3rem);font-weight:900;margin-bottom:1.25rem}
.section-head p{color:var(--fg2);max-width:48rem;margin:0 auto}

.stats{padding:5rem 0}
.stats-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1.5rem;text-align:center}
.stat-value{font-size:2.25rem;font-weight:900}
.stat-label{font-size:.875rem;color:var(--fg3);font-weight:500}

.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1.5rem}
.card{background:rgba(0,0,0,.3);backdrop-filter:blur(24px);border:1px solid var(--border);border-radius:1rem;overflow:hidden;display:flex;flex-direction:column;transition:transform .5s,border-color .5s}
.card:hover{transform:translateY(-.5rem);border-color:rgba(255,255,255,.2)}
.card-media{position:relative;height:10rem;background:linear-gradient(135deg,rgba(124,58,237,.3),rgba(37,99,235,.3));display:flex;align-items:center;justify-content:center}
.card-media img{width:100%;height:100%;object-fit:cover}
.card-initial{font-size:3rem;font-weight:900;color:rgba(255,255,255,.8)}
.card-badge{position:absolute;top:.75rem;left:.75rem;font-size:.7rem;font-weight:600;text-transform:uppercase;letter-spacing:.05em;padding:.2rem .6rem;border-radius:9999px;background:rgba(0,0,0,.6);border:1px solid var(--border)}
.card-body{padding:1.5rem;display:flex;flex-direction:column;gap:.75rem;flex:1}
.card-title{font-size:1.125rem;font-weight:700}
.card-description{font-size:.9rem;color:var(--fg2);flex:1}
.card-tech{display:flex;flex-wrap:wrap;gap:.4rem;list-style:none}
.card-tech li{font-size:.75rem;padding:.15rem .55rem;border-radius:9999px;background:var(--glass);border:1px solid var(--border);color:var(--fg2)}
.card-stats{display:flex;gap:1rem;font-size:.85rem;color:var(--fg3)}
.card-link{font-size:.875rem;font-weight:600;color:#c084fc}
.card-link:hover{color:#e9d5ff}
.empty{text-align:center;color:var(--fg3)}

.features{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:1.5rem}
.feature{background:rgba(0,0,0,.3);border:1px solid var(--border);border-radius:1rem;padding:1.75rem;transition:transform .5s}
.feature:hover{transform:translateY(-.5rem)}
.feature-icon{width:3rem;height:3rem;border-radius:.75rem;background:linear-gradient(90deg,#9333ea,#2563eb);display:flex;align-items:center;justify-content:center;margin-bottom:1.25rem;font-size:1.25rem}
.feature h3{font-size:1.125rem;font-weight:700;margin-bottom:.75rem}
.feature p{font-size:.95rem;color:var(--fg2)}

.contact-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(20rem,1fr));gap:3rem;align-items:center}
.contact-grid h2{font-size:clamp(2.25rem,5vw,3rem);font-weight:900;line-height:1.1;margin-bottom:1.5rem}
.contact-grid h2 span{display:block}
.contact-intro{color:var(--fg2);margin-bottom:2.5rem}
.contact-item{display:flex;align-items:center;gap:1.5rem}
.contact-item-title{font-weight:700}
.contact-item-info{font-size:.875rem;color:var(--fg2)}
.form{background:rgba(0,0,0,.5);border:1px solid var(--border);border-radius:1.5rem;padding:2.5rem;display:flex;flex-direction:column;gap:1.5rem}
.form-row{display:grid;grid-template-columns:repeat(auto-fit,minmax(12rem,1fr));gap:1.5rem}
.form label{display:block;font-size:.75rem;font-weight:600;text-transform:uppercase;letter-spacing:.05em;color:#e5e7eb;margin-bottom:.5rem}
.form input,.form textarea{width:100%;padding:.75rem .9rem;background:var(--glass);border:1px solid rgba(255,255,255,.2);border-radius:.75rem;color:var(--fg);font:inherit;font-size:.875rem}
.form input:focus,.form textarea:focus{outline:none;border-color:#c084fc;background:rgba(255,255,255,.1)}

.footer{position:relative;z-index:10;border-top:1px solid var(--border);padding:2.5rem 0;text-align:center;font-size:.875rem;color:var(--fg3)}

@media (max-width:768px){.nav-links{display:none}section{padding:5rem 0}}
"#;

/// Inline script for the page.
///
/// Handles the pointer-driven hero gradient, the one-shot stats counter, smooth
/// section scrolling and contact-form submission.
pub const PAGE_JS: &str = r#"
(function () {
  var HEADER_OFFSET = 96;

  var hero = document.getElementById('hero');
  document.addEventListener('mousemove', function (e) {
    if (!hero) return;
    var rect = hero.getBoundingClientRect();
    hero.style.setProperty('--mx', ((e.clientX - rect.left) / rect.width) * 100 + '%');
    hero.style.setProperty('--my', ((e.clientY - rect.top) / rect.height) * 100 + '%');
  });

  document.querySelectorAll('a[data-scroll]').forEach(function (link) {
    link.addEventListener('click', function (e) {
      var target = document.querySelector(link.getAttribute('href'));
      if (!target) return;
      e.preventDefault();
      var top = target.getBoundingClientRect().top + window.pageYOffset - HEADER_OFFSET;
      window.scrollTo({ top: top, behavior: 'smooth' });
    });
  });

  function animateCounters() {
    document.querySelectorAll('[data-count]').forEach(function (el) {
      var target = Number(el.dataset.count);
      var scale = Number(el.dataset.scale || 1);
      var suffix = el.dataset.suffix || '';
      var start = null;
      function step(now) {
        if (start === null) start = now;
        var progress = Math.min((now - start) / 1200, 1);
        el.textContent = Math.round((target * progress) / scale) + suffix;
        if (progress < 1) requestAnimationFrame(step);
      }
      requestAnimationFrame(step);
    });
  }

  var stats = document.getElementById('stats-section');
  if (stats && 'IntersectionObserver' in window) {
    var observer = new IntersectionObserver(function (entries) {
      if (entries[0] && entries[0].isIntersecting) {
        observer.disconnect();
        animateCounters();
      }
    }, { threshold: 0.3 });
    observer.observe(stats);
  }

  var form = document.getElementById('contact-form');
  if (!form) return;
  form.addEventListener('submit', async function (e) {
    e.preventDefault();
    var button = form.querySelector('button[type="submit"]');
    button.disabled = true;
    try {
      var response = await fetch('/api/send-message', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          name: form.fullname.value,
          email: form.email.value,
          subject: form.subject.value,
          message: form.message.value
        })
      });
      if (response.ok) {
        form.reset();
        alert('Message sent successfully!');
      } else {
        var error = await response.json().catch(function () { return {}; });
        alert('Error: ' + (error.message || 'Unknown error'));
      }
    } catch (err) {
      console.error('Error sending message:', err);
      alert('Failed to send message. Please try again.');
    } finally {
      button.disabled = false;
    }
  });
})();
"#;
