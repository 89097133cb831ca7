use chrono::{DateTime, Duration, Utc};
use pulse_core::common::NewsCategory;
use pulse_core::news::entity::{Article, ArticleSource, NewsPage};
use rand::Rng;

/// 每页文章数
pub const ARTICLES_PER_PAGE: usize = 6;
/// 固定的结果总数
pub const TOTAL_RESULTS: u32 = 100;
/// 固定的总页数
pub const TOTAL_PAGES: u32 = 10;

const ONE_DAY_SECS: i64 = 24 * 60 * 60;

const CONTENT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam auctor, nisl eget ultricies tincidunt, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl. Nullam auctor, nisl eget ultricies tincidunt, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl. Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam auctor, nisl eget ultricies tincidunt, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl. Nullam auctor, nisl eget ultricies tincidunt, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl.";

/// 新闻来源 (名称, 地址)
pub const SOURCES: [(&str, &str); 7] = [
    ("Tech News", "https://technews.com"),
    ("Business Daily", "https://businessdaily.com"),
    ("Sports Center", "https://sportscenter.com"),
    ("Health Journal", "https://healthjournal.com"),
    ("Entertainment Weekly", "https://entertainmentweekly.com"),
    ("Science Today", "https://sciencetoday.com"),
    ("Global Post", "https://globalpost.com"),
];

/// 分类对应的 6 个固定标题
pub fn titles(category: NewsCategory) -> &'static [&'static str; 6] {
    match category {
        NewsCategory::General => &[
            "Global Summit Addresses Climate Change",
            "New Economic Policy Announced",
            "International Relations Strengthen Between Nations",
            "Major Infrastructure Project Launched",
            "Cultural Festival Celebrates Diversity",
            "Education Reform Bill Passes",
        ],
        NewsCategory::Technology => &[
            "New AI Model Breaks Performance Records",
            "Tech Giant Unveils Revolutionary Smartphone",
            "Quantum Computing Breakthrough Announced",
            "Cybersecurity Threats on the Rise",
            "New Programming Language Gains Popularity",
            "Robotics Innovation Changes Manufacturing",
        ],
        NewsCategory::Business => &[
            "Stock Market Reaches All-Time High",
            "Major Merger Between Industry Leaders",
            "Startup Secures Record Funding Round",
            "Economic Forecast Predicts Growth",
            "New Trade Agreement Signed",
            "Retail Sales Exceed Expectations",
        ],
        NewsCategory::Sports => &[
            "Championship Final Ends in Dramatic Fashion",
            "Athlete Breaks World Record",
            "Team Announces New Coach",
            "Olympic Committee Reveals Future Plans",
            "Player Signs Record-Breaking Contract",
            "Tournament Expands to New Countries",
        ],
        NewsCategory::Health => &[
            "New Medical Treatment Shows Promise",
            "Health Study Reveals Surprising Findings",
            "Pandemic Response Strategies Evaluated",
            "Mental Health Awareness Campaign Launched",
            "Breakthrough in Disease Prevention",
            "Fitness Trend Gains Global Popularity",
        ],
        NewsCategory::Entertainment => &[
            "Blockbuster Movie Breaks Box Office Records",
            "Celebrity Announces New Project",
            "Award Show Celebrates Outstanding Achievements",
            "Streaming Platform Releases Original Series",
            "Music Festival Lineup Revealed",
            "Theater Production Receives Critical Acclaim",
        ],
        NewsCategory::Science => &[
            "Astronomers Discover New Exoplanet",
            "Climate Research Shows Concerning Trends",
            "Breakthrough in Renewable Energy Technology",
            "Marine Biologists Document New Species",
            "Space Mission Reveals Surprising Data",
            "Genetic Research Opens New Possibilities",
        ],
    }
}

/// 分类对应的配图列表
pub fn images(category: NewsCategory) -> &'static [&'static str] {
    match category {
        NewsCategory::General => &[
            "/placeholder.svg?height=400&width=600&text=Global+Summit",
            "/placeholder.svg?height=400&width=600&text=Economic+Policy",
            "/placeholder.svg?height=400&width=600&text=International+Relations",
            "/placeholder.svg?height=400&width=600&text=Infrastructure+Project",
            "/placeholder.svg?height=400&width=600&text=Cultural+Festival",
            "/placeholder.svg?height=400&width=600&text=Education+Reform",
        ],
        NewsCategory::Technology => &[
            "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1518770660439-4636190af475?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1531297484001-80022131f5a1?w=600&h=400&fit=crop",
        ],
        NewsCategory::Business => &[
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1507679799987-c73779587ccf?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1444653614773-995cb1ef9efa?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1521791136064-7986c2920216?w=600&h=400&fit=crop",
        ],
        NewsCategory::Sports => &[
            "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1517649763962-0c623066013b?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1535131749006-b7f58c99034b?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1552667466-07770ae110d0?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1587280501635-68a0e82cd5ff?w=600&h=400&fit=crop",
        ],
        NewsCategory::Health => &[
            "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1532938911079-1b06ac7ceec7?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1538805060514-97d9cc17730c?w=600&h=400&fit=crop",
        ],
        NewsCategory::Entertainment => &[
            "https://images.unsplash.com/photo-1603190287605-e6ade32fa852?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1598899134739-24c46f58b8c0?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1578022761797-b8636ac1773c?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1616469829941-c7200edec809?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1507676184212-d03ab07a01bf?w=600&h=400&fit=crop",
        ],
        NewsCategory::Science => &[
            "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1564325724739-bae0bd08762c?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1507413245164-6160d8298b31?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1581093588401-fbb62a02f120?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1614935151651-0bea6508db6b?w=600&h=400&fit=crop",
            "https://images.unsplash.com/photo-1517976487492-5750f3195933?w=600&h=400&fit=crop",
        ],
    }
}

/// # Summary
/// 生成一页模拟新闻。
///
/// # Logic
/// 1. 将分类名解析为已知分类，未知分类的标题与配图回退到 `general`。
/// 2. 第 i 篇的标题下标为 `((page - 1) * 6 + i) mod 6`，因此各页循环使用同一组标题。
/// 3. `id`/`url` 使用调用方传入的原始分类名，保证同一页内唯一。
/// 4. 发布时间为 `now` 之前 24 小时内的随机时刻，来源从 7 个固定来源中均匀抽取。
///
/// # Arguments
/// * `rng`: 随机源。
/// * `category`: 分类名。
/// * `page`: 页码（从 1 开始，0 按 1 处理）。
/// * `now`: 参考时间。
///
/// # Returns
/// 含 6 篇文章及固定分页信息的结果。
pub fn generate_news_page<R: Rng + ?Sized>(
    rng: &mut R,
    category: &str,
    page: u32,
    now: DateTime<Utc>,
) -> NewsPage {
    let known = NewsCategory::resolve(category);
    let titles = titles(known);
    let images = images(known);
    let page_offset = usize::try_from(page.saturating_sub(1)).unwrap_or(0) * ARTICLES_PER_PAGE;

    let articles = (0..ARTICLES_PER_PAGE)
        .map(|i| {
            let title = titles[(page_offset + i) % titles.len()];
            let published_at = now - Duration::seconds(rng.random_range(0..ONE_DAY_SECS));
            let (source_name, source_url) = SOURCES[rng.random_range(0..SOURCES.len())];

            Article {
                id: format!("{}-{}-{}", category, page, i),
                title: title.to_string(),
                description: format!(
                    "This is a summary of the article about {}. The article provides in-depth analysis and expert opinions on this topic.",
                    title.to_lowercase()
                ),
                content: CONTENT.to_string(),
                url: format!("https://example.com/news/{}/{}/{}", category, page, i),
                image: images[i % images.len()].to_string(),
                published_at,
                source: ArticleSource {
                    name: source_name.to_string(),
                    url: source_url.to_string(),
                },
            }
        })
        .collect();

    NewsPage {
        articles,
        total_results: TOTAL_RESULTS,
        total_pages: TOTAL_PAGES,
    }
}
