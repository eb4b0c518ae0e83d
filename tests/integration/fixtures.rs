//! Page fixtures and configuration helpers shared by the integration tests

use douban_meta::config::Config;
use url::form_urlencoded::byte_serialize;

pub const TEST_USER_AGENT: &str = "DoubanMetaTest/1.0";

/// Configuration pointing the search endpoint at a mock server
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.http.user_agent = TEST_USER_AGENT.to_string();
    config.http.request_timeout_secs = 5;
    config.search.search_url = format!("{}/search", base_url);
    config.cache.politeness_delay_ms = 0;
    config
}

pub fn subject_url(base_url: &str, id: u32) -> String {
    format!("{}/subject/{}/", base_url, id)
}

/// Results page whose cover anchors wrap the given subjects in redirect links
pub fn search_page(base_url: &str, ids: &[u32]) -> String {
    let results: String = ids
        .iter()
        .enumerate()
        .map(|(pos, id)| {
            let target: String = byte_serialize(subject_url(base_url, *id).as_bytes()).collect();
            format!(
                r#"<div class="result">
                  <div class="pic"><a class="nbg" href="https://www.douban.com/link2/?url={}&amp;query=q&amp;cat_id=1001&amp;pos={}" onclick="moreurl(this)"><img src="cover.jpg"></a></div>
                  <div class="content"><h3><a href="https://www.douban.com/link2/?url={}">result {}</a></h3></div>
                </div>"#,
                target, pos, target, id
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html><html><head><title>搜索</title></head><body><div class="result-list">{}</div></body></html>"#,
        results
    )
}

/// Minimal book detail page
pub fn book_page(base_url: &str, id: u32, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>{title} (豆瓣)</title></head>
<body>
<h1><span property="v:itemreviewed">{title}</span></h1>
<div id="mainpic"><a class="nbg" href="https://img.example.com/{id}.jpg"><img src="s.jpg"></a></div>
<div id="info">
  <span><span class="pl"> 作者</span>: <a href="/author/{id}">作者{id}</a></span><br/>
  <span class="pl">出版社:</span> 测试出版社<br/>
  <span class="pl">出版年:</span> 2020-11<br/>
  <span class="pl">ISBN:</span> 978000000{id}<br/>
</div>
<strong class="ll rating_num" property="v:average"> 8.6 </strong>
<div id="link-report"><div class="intro"><p>简介 {id}</p></div></div>
<a class="share" href="javascript:;" data-url="{url}">分享</a>
<script>var criteria = '7:suspense|6:other|7:classic';</script>
</body></html>"#,
        title = title,
        id = id,
        url = subject_url(base_url, id)
    )
}

/// Minimal movie detail page
pub fn movie_page(base_url: &str, id: u32, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
<h1><span property="v:itemreviewed">{title}</span></h1>
<div id="info">
  <span><span class="pl">导演</span>: <span class="attrs"><a href="/celebrity/{id}/">导演{id}</a></span></span><br/>
  <span class="pl">上映日期:</span> <span property="v:initialReleaseDate">1994-09-10(多伦多电影节)</span><br/>
  <span class="pl">IMDb:</span> tt0111161<br/>
</div>
<a data-url="{url}">分享</a>
</body></html>"#,
        title = title,
        id = id,
        url = subject_url(base_url, id)
    )
}
