//! Reference model constants.
//!
//! Trained offline; rows follow the point-major feature layout
//! `[x0, y0, z0, x1, ...]`, columns are class indices `0..4`.

#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

use crate::features::FEATURE_LEN;
use crate::model::CLASS_COUNT;

/// Reference weight matrix, `FEATURE_LEN` rows by `CLASS_COUNT` columns.
pub(crate) const REFERENCE_WEIGHTS: [[f64; CLASS_COUNT]; FEATURE_LEN] = [
    [-0.2939860770044298, 0.09723430308772632, -5.8114779784705916e-05, -0.02535958925156674],
    [-0.026547021982165978, -0.07325275954928155, 0.24431599064351167, -0.1284516440518801],
    [-0.1088711577216958, 0.06371041329786808, -0.2449590849562378, -0.12390209693974544],
    [-0.36595148488491874, -0.1477640727754343, -0.1188116693589042, 0.2332856206145177],
    [0.2250530337676147, 0.10994632975312157, -0.08203527997702165, -0.04122503170348685],
    [-0.017141155540407304, -0.05246368736341544, 0.18373496726606792, 0.04619960344185404],
    [0.02957296061079147, 0.08038772189758289, 0.18368826774031327, 0.12022514233139368],
    [0.15901943265261095, 0.10974937533788806, 0.18593050606515515, 0.02237723655667493],
    [-0.08454869556532507, 0.09829728754180764, 0.24674900111057596, -0.09694105311734709],
    [-0.04526658422621021, -0.06418849321126383, -0.007597605510823047, -0.030448663266399233],
    [-0.006918458660713108, 0.09018297581083959, 0.08716237166308607, -0.18443620200643418],
    [-0.12109533778586662, -3.8054374848775756e-05, 0.0079864246310172, -0.09946487244570437],
    [-0.1237527365004774, -0.1409503906940357, -0.030641026521276163, -0.22237915811211725],
    [-0.2562546153238391, 0.0718339962970599, 0.014622690726168813, -0.16897626528447107],
    [-0.08591140692208454, 0.1070244171033012, 0.0911015907308121, 0.016689694627373138],
    [0.09956910320646109, 0.14430382771678768, 0.11651022322663697, 0.025567947410689174],
    [0.07650265388080327, 0.010443125614813458, -0.0046401691802440085, 0.243555464355283],
    [-0.4092128319185818, -0.07880010165534487, -0.7611971021786569, -0.2339731577765501],
    [0.005448210791490093, 0.5902557676326028, 0.38797858107436645, 0.04266977406431992],
    [-0.1520286126294874, 0.023640152804657536, 0.2586780631902106, -0.031124337295588615],
    [-0.44611236324844356, 0.038259779760273414, 0.30495128780297187, 0.774625608250122],
    [-0.14098662014061486, -0.06103960712101428, -1.2695309249349347, 0.16534332356166853],
    [-0.00792078370000382, 0.7349992917755245, -0.6320700796815668, -0.18236540734410203],
    [0.20547805641430836, 0.22272707479292284, 0.08777104054288214, 0.09494771255100744],
    [-0.13812641541170323, -0.6776367358853189, 0.45286612428656037, -0.0131325656816387],
    [0.4704723350914922, -0.3766632217611846, 0.4647734027240634, 0.04979377444639819],
    [-0.017224809421251045, -0.5285570663720642, 0.6308372635668709, -0.3052053168896781],
    [0.5640499501256738, -0.6125729318634511, -0.5840162215313851, -0.3114021161064909],
    [0.2441981494133183, 0.5838723660993764, 0.10599572108041755, 0.11258267086570017],
    [-0.4696122285504879, -0.18648865793314964, -1.0315691235465592, 0.6760269154584998],
    [0.15406132176287435, 1.3369892522573665, -0.01001936544835204, -0.013342934779200339],
    [-0.5923451540771605, -0.2374873412506417, -0.20101828245907216, -0.32179200423676413],
    [-9.354689429622233e-06, 0.1341157974021667, -0.061178292524045906, 0.18017685619291943],
    [0.14689629687643405, 0.15808934476645556, 0.08743823525899137, -0.2897675660664541],
    [0.0441362389489192, 0.002684817069389089, 0.10439205776693468, -0.1446887244383349],
    [0.09354207496391985, 0.31451925520679425, -0.16894783678487355, 0.010919705071258782],
    [0.06761107584291787, 0.7096339919778875, 0.12023582352563578, -0.32741923374285836],
    [0.08203058406143642, -0.3143902188270454, 0.13955542833524034, -0.31621214902420647],
    [-0.764958569474221, -0.36847892209859945, -0.13320315618095172, 0.0908214702802807],
    [0.3878722947741917, -0.2008427560284789, -0.1400373128876416, 0.045556037691687534],
    [-0.37398565623014, -0.15277413089072298, -0.07363062405892383, 0.15291484193614918],
    [0.2982464279003806, -0.5246162641558091, -0.19919961889033805, 0.21215522288629057],
    [0.25272128265641647, 0.03567137438008118, 0.23101234202099913, 0.15759783040201286],
    [0.08096027514765236, 0.1932295419013112, 0.2673905719394914, 0.06399074468432168],
    [0.37274805222375984, 0.17402416496077924, 0.7624917776596186, 0.3314461077031336],
    [0.06795177633838165, 0.022089201355727527, 0.21166896696488835, -0.1994259614381957],
    [-0.3004350945418218, -0.05759887055917021, -0.2676268583817938, 0.03516047795004511],
    [-0.14579096690282103, -0.21899350456464461, -0.08611754753916484, -0.006705608281127654],
    [0.23328395113552836, -0.44040385843625307, 0.8095800574543358, -0.3753426191735986],
    [0.8243468433192198, 0.2779740423314168, 0.5829836593216431, -0.31643146740990064],
    [-0.2905210915442936, -0.375512823078596, 0.01514049631819873, -0.30582570555737043],
    [0.4885056046749353, -0.08526833408874175, -0.10313048854782537, -0.43394831416880053],
    [-0.4524693275580188, 0.7590408138743738, 0.7932545320107586, 0.13591209155787523],
    [0.8246846634210173, -0.5391882351256211, -0.048379893079876585, -0.9312840763016041],
    [-0.6079021395305816, 0.3064325087396284, -0.5605413902260922, -0.3910547974977102],
    [0.3750788437503751, -0.40703192300261504, 0.13971485944716894, 0.5092901355686379],
    [0.035480145205683065, 0.11640265692439898, -0.43884529020455476, 0.07127291505069287],
    [0.23601129515015987, -0.27679487623802224, -0.2561042740162541, 0.5329622307384485],
    [-0.608628880419949, -0.10888326744148616, 0.0641924987726172, -0.2982122845271812],
    [0.044208082963237985, -0.15869607723669615, 0.22879497663709247, 0.08480065630036229],
    [0.05129352235358517, 0.15867280214740295, 1.1497898508372546, 0.33458455083371513],
    [0.475208353297948, -0.32902545115798604, -1.12992740562698, -0.1593579747184018],
    [-0.16139239279657017, 0.6505053540069456, 0.1466336784142029, 0.2532719994273686],
];

/// Reference per-class bias added after the matrix multiply.
pub(crate) const REFERENCE_BIAS: [f64; CLASS_COUNT] = [
    -0.004022874980557995979,
    2.698146777990787726,
    -0.1184259554171348261,
    -1.090657369844077573,
];
