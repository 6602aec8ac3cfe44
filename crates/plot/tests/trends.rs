//! End-to-end behaviour of `plot_sentiment_trends`.

use anyhow::Result;
use approx::assert_relative_eq;
use trend_core::{ArticleDataset, ArticleRecord, Error, TrendConfig, YearBucket};
use trend_ingestion::load_csv_reader;
use trend_plot::{plot_sentiment_trends, RenderContext, TrendPlotter, YRange};

fn records(disease: &str, date: &str, scores: &[f64]) -> Vec<ArticleRecord> {
    scores
        .iter()
        .map(|&s| ArticleRecord::new(disease, s, date))
        .collect()
}

/// 12 flu rows in 2020 (8 positive, 4 negative), 5 flu rows in 2019,
/// and an unrelated disease.
fn example_dataset() -> ArticleDataset {
    let mut rows = Vec::new();
    rows.extend(records("flu", "2020-02-10", &[0.5; 8]));
    rows.extend(records("flu", "2020-11-30", &[-0.5; 4]));
    rows.extend(records("flu", "2019-05-05", &[0.2, -0.2, 0.3, 0.1, 0.0]));
    rows.extend(records("measles", "2020-01-01", &[0.9; 15]));
    rows.into_iter().collect()
}

#[test]
fn example_table_and_figures() -> Result<()> {
    let mut ctx = RenderContext::default();
    let table = plot_sentiment_trends(&example_dataset(), "flu", &mut ctx)?;

    assert_eq!(table.len(), 1);
    let row = &table.rows()[0];
    assert_eq!(row.group_date, YearBucket::new(2020).unwrap());
    assert_eq!(row.count, 12);
    assert_relative_eq!(row.perc_pos, 8.0 / 12.0);
    assert_relative_eq!(row.mean, 1.0 / 6.0, epsilon = 1e-12);

    let figures = ctx.figures();
    assert_eq!(figures.len(), 2);

    let percent = &figures[0];
    assert_eq!(percent.title, "Percent Positive flu Articles");
    assert_eq!(percent.categories, vec!["2020"]);
    assert_eq!(percent.y_range, YRange::Fixed { min: 0.0, max: 1.0 });
    assert_eq!(percent.reference.y, 0.0);
    assert!(percent.reference.dashed);

    let mean = &figures[1];
    assert_eq!(mean.title, "Average flu Article Sentiment");
    assert_eq!(mean.y_range, YRange::Auto);
    assert_relative_eq!(mean.series[0].values[0], 1.0 / 6.0, epsilon = 1e-12);

    let svgs = ctx.render_svgs();
    assert_eq!(svgs.len(), 2);
    assert!(svgs[0].contains("Percent Positive flu Articles"));
    assert!(svgs[1].contains("Average flu Article Sentiment"));
    Ok(())
}

#[test]
fn rejected_requests_draw_nothing() {
    let mut ctx = RenderContext::default();

    let err = plot_sentiment_trends(&example_dataset(), "", &mut ctx).unwrap_err();
    assert!(err.to_string().contains("must supply a term"));

    let err = plot_sentiment_trends(&ArticleDataset::default(), "flu", &mut ctx).unwrap_err();
    assert!(err.to_string().contains("must supply a dataset"));

    let err = plot_sentiment_trends(&example_dataset(), "cholera", &mut ctx).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    let msg = err.to_string();
    assert!(msg.contains("\"flu\"") && msg.contains("\"measles\""));

    assert!(ctx.figures().is_empty());
}

#[test]
fn malformed_date_is_reported() {
    let mut rows = records("flu", "2020-01-01", &[0.4; 11]);
    rows.push(ArticleRecord::new("flu", 0.4, "last spring"));
    let dataset: ArticleDataset = rows.into_iter().collect();

    let mut ctx = RenderContext::default();
    let err = plot_sentiment_trends(&dataset, "flu", &mut ctx).unwrap_err();
    assert!(matches!(err, Error::DateParse { row: 11, .. }));
    assert!(ctx.figures().is_empty());
}

#[test]
fn repeated_calls_accumulate_in_their_own_context() -> Result<()> {
    let dataset = example_dataset();
    let mut first = RenderContext::new("ggplot")?;
    let mut second = RenderContext::new("classic")?;

    plot_sentiment_trends(&dataset, "flu", &mut first)?;
    plot_sentiment_trends(&dataset, "FLU", &mut first)?;
    plot_sentiment_trends(&dataset, "measles", &mut second)?;

    assert_eq!(first.figures().len(), 4);
    assert_eq!(second.figures().len(), 2);
    assert_eq!(first.figures()[2].title, "Percent Positive FLU Articles");
    assert_eq!(second.figures()[0].title, "Percent Positive measles Articles");
    Ok(())
}

#[test]
fn csv_to_charts() -> Result<()> {
    let mut csv = String::from("disease,abs_scores,Clean_Date,title\n");
    for i in 0..11 {
        let score = if i % 3 == 0 { -0.25 } else { 0.75 };
        csv.push_str(&format!("asthma,{score},2018-0{}-01,a\n", i % 9 + 1));
    }
    for i in 0..14 {
        csv.push_str(&format!("asthma,0.1,2017-01-{:02} 09:30:00,b\n", i + 1));
    }
    csv.push_str("asthma,0.5,2016-01-01,c\n");

    let dataset = load_csv_reader(csv.as_bytes())?;
    let mut ctx = RenderContext::default();
    let table = plot_sentiment_trends(&dataset, "Asthma", &mut ctx)?;

    assert_eq!(table.years(), vec!["2017", "2018"]);
    let y2018 = &table.rows()[1];
    assert_eq!(y2018.count, 11);
    assert_eq!(y2018.count_neg, Some(4));
    assert_eq!(y2018.count_pos, Some(7));

    let y2017 = &table.rows()[0];
    assert_eq!(y2017.count_neg, None);
    assert!(y2017.mean_neg.is_nan());
    assert_relative_eq!(y2017.perc_pos, 1.0);

    for row in table.rows() {
        assert!((0.0..=1.0).contains(&row.perc_pos));
        assert!(row.count > 10);
        assert_eq!(row.count_pos.unwrap_or(0) + row.count_neg.unwrap_or(0), row.count);
    }
    Ok(())
}

#[test]
fn configured_plotter() -> Result<()> {
    let config = TrendConfig::from_json_str(
        r#"{"aggregation": {"min_count": 3}, "plot": {"style": "dark_background", "mean_color": "orange"}}"#,
    )?;
    let mut ctx = RenderContext::from_config(config.plot.clone())?;
    let table = TrendPlotter::from_config(&config).run(&example_dataset(), "flu", &mut ctx)?;

    assert_eq!(table.years(), vec!["2019", "2020"]);
    assert_eq!(ctx.style().name, "dark_background");
    assert_eq!(ctx.figures()[1].series[0].color, "orange");
    Ok(())
}

#[test]
fn save_figures_as_svg() -> Result<()> {
    let mut ctx = RenderContext::default();
    plot_sentiment_trends(&example_dataset(), "flu", &mut ctx)?;

    let dir = std::env::temp_dir().join(format!("trend-plot-{}", std::process::id()));
    let paths = ctx.save_all(&dir, "flu")?;

    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("flu_1.svg"));
    let text = std::fs::read_to_string(&paths[1])?;
    assert!(text.contains("<svg"));

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn table_exports() -> Result<()> {
    let mut ctx = RenderContext::default();
    let table = plot_sentiment_trends(&example_dataset(), "flu", &mut ctx)?;

    let mut buf = Vec::new();
    table.write_csv(&mut buf)?;
    let text = String::from_utf8(buf)?;
    assert!(text.starts_with("group_date,min_pos,max_pos,mean_pos,count_pos,"));
    assert!(text.lines().nth(1).unwrap_or_default().starts_with("2020,0.5,0.5,0.5,8,"));

    let json = table.to_json()?;
    assert!(json.contains("\"perc_pos\""));
    Ok(())
}
